pub mod image_codec;

pub use image_codec::{decode_skin_bytes, encode_png};
