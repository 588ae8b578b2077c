pub mod texture_client;

pub use texture_client::{HttpSkinSource, SkinSource};
