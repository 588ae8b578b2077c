pub mod session_key;
pub mod verifier;

pub use session_key::SessionPublicKey;
pub use verifier::verify_signature;
