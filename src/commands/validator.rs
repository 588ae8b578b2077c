use image::ImageFormat;

use crate::domain::skin::{
    layout::{require_layout, SkinLayout},
    pixel_grid::PixelGrid,
};
use crate::infrastructure::codec::image_codec::{decode_skin_bytes, guess_format};

pub fn validate_skin_png(bytes: &[u8]) -> Result<SkinLayout, String> {
    let grid = decode_skin_png(bytes)?;
    require_layout(&grid).map_err(|err| err.to_string())
}

/// Decodifica un PNG de skin y comprueba sus dimensiones; el lienzo queda listo para reutilizar.
pub(crate) fn decode_skin_png(bytes: &[u8]) -> Result<PixelGrid, String> {
    let format = guess_format(bytes).map_err(|err| err.to_string())?;
    if format != ImageFormat::Png {
        return Err("El archivo debe ser PNG".into());
    }

    let grid = decode_skin_bytes(bytes).map_err(|err| err.to_string())?;
    require_layout(&grid).map_err(|err| err.to_string())?;
    Ok(grid)
}
