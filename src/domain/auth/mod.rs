pub mod profile;
pub mod property;

pub use profile::GameProfile;
pub use property::SignedProperty;
