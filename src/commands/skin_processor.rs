use crate::domain::skin::{
    compositor::{composite_head, composite_model},
    layout::require_layout,
    resize::scale,
};
use crate::infrastructure::{
    codec::image_codec::{decode_skin_bytes, encode_png},
    filesystem::config::RenderConfig,
};

pub fn optimize_skin_png(bytes: Vec<u8>) -> Result<Vec<u8>, String> {
    let grid = crate::commands::validator::decode_skin_png(&bytes)?;
    encode_png(&grid).map_err(|err| format!("No se pudo optimizar PNG: {err}"))
}

pub fn render_skin_head_png(bytes: Vec<u8>, zoom: i32, helmet: bool) -> Result<Vec<u8>, String> {
    let grid = decode_skin_bytes(&bytes).map_err(|err| err.to_string())?;
    let head = composite_head(&grid, helmet).map_err(|err| err.to_string())?;
    let zoom = RenderConfig::default().normalize_zoom(i64::from(zoom));
    let head = scale(&head, zoom).map_err(|err| err.to_string())?;
    encode_png(&head).map_err(|err| err.to_string())
}

pub fn render_skin_model_png(bytes: Vec<u8>, zoom: i32, helmet: bool) -> Result<Vec<u8>, String> {
    let grid = decode_skin_bytes(&bytes).map_err(|err| err.to_string())?;
    let layout = require_layout(&grid).map_err(|err| err.to_string())?;
    let model = composite_model(&grid, layout, helmet).map_err(|err| err.to_string())?;
    let zoom = RenderConfig::default().normalize_zoom(i64::from(zoom));
    let model = scale(&model, zoom).map_err(|err| err.to_string())?;
    encode_png(&model).map_err(|err| err.to_string())
}
