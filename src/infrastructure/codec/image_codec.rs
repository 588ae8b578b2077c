use image::{codecs::png::PngEncoder, ColorType, ImageEncoder, ImageFormat};

use crate::domain::skin::pixel_grid::PixelGrid;
use crate::shared::result::{AppResult, TextureError};

/// Decodifica cualquier contenedor soportado y lo redibuja en RGBA8 antes de pasarlo a ARGB.
pub fn decode_skin_bytes(bytes: &[u8]) -> AppResult<PixelGrid> {
    let image = image::load_from_memory(bytes)
        .map_err(|err| TextureError::Image(format!("No se pudo leer imagen: {err}")))?;
    Ok(PixelGrid::from_image(image.to_rgba8()))
}

pub fn guess_format(bytes: &[u8]) -> AppResult<ImageFormat> {
    image::guess_format(bytes)
        .map_err(|err| TextureError::Image(format!("No se pudo detectar formato: {err}")))
}

pub fn encode_png(grid: &PixelGrid) -> AppResult<Vec<u8>> {
    let mut output = Vec::<u8>::new();
    let encoder = PngEncoder::new(&mut output);
    encoder
        .write_image(
            grid.as_image().as_raw(),
            grid.width(),
            grid.height(),
            ColorType::Rgba8.into(),
        )
        .map_err(|err| TextureError::Image(format!("No se pudo codificar PNG: {err}")))?;
    Ok(output)
}
