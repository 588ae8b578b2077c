pub mod payload;
pub mod texture;

pub use payload::{decode_textures, decode_textures_payload, encode_textures_payload, TexturesPayload};
pub use texture::{ProfileTexture, SkinModel, TextureType};
