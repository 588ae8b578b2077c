use image::imageops::{self, FilterType};

use super::pixel_grid::PixelGrid;
use crate::shared::result::{AppResult, TextureError};

/// Lado máximo de un lienzo escalado.
pub const MAX_SCALED_SIDE: u32 = 16_384;

/// Amplía por un factor entero con vecino más cercano; un factor 0 se trata como 1.
///
/// El resultado mide exactamente `(w * n, h * n)`. Si alguna de las dos medidas
/// pasa de [`MAX_SCALED_SIDE`] se devuelve `ScaleOverflow`.
pub fn scale(grid: &PixelGrid, factor: u32) -> AppResult<PixelGrid> {
    let factor = factor.max(1);
    if factor == 1 {
        return Ok(grid.clone());
    }

    let (width, height) = grid.dimensions();
    let scaled_side = |side: u32| {
        side.checked_mul(factor)
            .filter(|scaled| *scaled <= MAX_SCALED_SIDE)
            .ok_or(TextureError::ScaleOverflow {
                width,
                height,
                factor,
            })
    };
    let target_width = scaled_side(width)?;
    let target_height = scaled_side(height)?;

    if target_width == 0 || target_height == 0 {
        return Ok(PixelGrid::new(target_width, target_height));
    }

    let scaled = imageops::resize(
        grid.as_image(),
        target_width,
        target_height,
        FilterType::Nearest,
    );
    Ok(PixelGrid::from_image(scaled))
}

/// Invierte el orden de las columnas; mismas dimensiones.
pub fn flip_horizontal(grid: &PixelGrid) -> PixelGrid {
    PixelGrid::from_image(imageops::flip_horizontal(grid.as_image()))
}
