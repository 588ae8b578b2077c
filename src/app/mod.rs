pub mod texture_service;

pub use texture_service::{RenderOptions, SkinRenders, TextureService};
