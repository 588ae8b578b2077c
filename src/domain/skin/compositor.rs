use std::collections::HashMap;

use super::{
    layout::{require_layout, SkinLayout},
    pixel_grid::PixelGrid,
    regions::{model_table, BodyPart, Placement, RegionTable, Source, HEAD_ICON, HEAD_SIZE, MODEL_SIZE},
    resize::flip_horizontal,
};
use crate::shared::result::{AppResult, TextureError};

/// Cabeza aislada de 8x8, con o sin capa exterior (casco).
pub fn composite_head(source: &PixelGrid, include_overlay: bool) -> AppResult<PixelGrid> {
    require_layout(source)?;
    Ok(composite(source, &HEAD_ICON, HEAD_SIZE, include_overlay))
}

/// Modelo 2D frontal de 16x32.
///
/// `layout` tiene que coincidir con las dimensiones de `source`.
pub fn composite_model(
    source: &PixelGrid,
    layout: SkinLayout,
    include_overlay: bool,
) -> AppResult<PixelGrid> {
    let detected = require_layout(source)?;
    if detected != layout {
        return Err(TextureError::UnsupportedSkinDimensions {
            width: source.width(),
            height: source.height(),
        });
    }
    Ok(composite(source, model_table(layout), MODEL_SIZE, include_overlay))
}

fn composite(
    source: &PixelGrid,
    table: &RegionTable,
    (width, height): (u32, u32),
    include_overlay: bool,
) -> PixelGrid {
    let mut canvas = PixelGrid::new(width, height);
    let mut extracted: HashMap<BodyPart, PixelGrid> = HashMap::new();

    for placement in table.base {
        if let Some(block) = extract(source, placement, &extracted) {
            canvas.put(placement.dst.0, placement.dst.1, &block);
            extracted.insert(placement.part, block);
        }
    }

    if include_overlay {
        for placement in table.overlay {
            if let Some(block) = extract(source, placement, &extracted) {
                canvas.overlay(placement.dst.0, placement.dst.1, &block);
            }
        }
    }

    canvas
}

fn extract(
    source: &PixelGrid,
    placement: &Placement,
    extracted: &HashMap<BodyPart, PixelGrid>,
) -> Option<PixelGrid> {
    match placement.source {
        Source::Atlas(rect) => Some(source.crop(rect)),
        Source::MirrorOf(part) => extracted.get(&part).map(flip_horizontal),
    }
}
