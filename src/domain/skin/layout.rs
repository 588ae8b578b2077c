use serde::Serialize;

use super::pixel_grid::PixelGrid;
use crate::shared::result::{AppResult, TextureError};

/// Geometría del atlas de la skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkinLayout {
    /// 64x32, una sola capa salvo la cabeza; brazo y pierna izquierdos se obtienen espejando.
    Legacy,
    /// 64x64, doble capa en todas las partes.
    Modern,
}

impl SkinLayout {
    /// `None` para cualquier tamaño que no sea 64x64 o 64x32.
    pub fn detect(width: u32, height: u32) -> Option<Self> {
        match (width, height) {
            (64, 64) => Some(Self::Modern),
            (64, 32) => Some(Self::Legacy),
            _ => None,
        }
    }

    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Legacy => (64, 32),
            Self::Modern => (64, 64),
        }
    }
}

pub fn detect_layout(grid: &PixelGrid) -> Option<SkinLayout> {
    SkinLayout::detect(grid.width(), grid.height())
}

pub fn require_layout(grid: &PixelGrid) -> AppResult<SkinLayout> {
    detect_layout(grid).ok_or(TextureError::UnsupportedSkinDimensions {
        width: grid.width(),
        height: grid.height(),
    })
}
