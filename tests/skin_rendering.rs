use pretty_assertions::assert_eq;
use skin_engine::{
    commands::skin_processor::render_skin_head_png,
    domain::skin::{
        argb, composite_head, composite_model, detect_layout, scale, Argb, PixelGrid, Rect,
        SkinLayout,
    },
    infrastructure::codec::{decode_skin_bytes, encode_png},
};

const RED: Argb = argb(255, 255, 0, 0);
const GREEN: Argb = argb(255, 0, 255, 0);
const BLUE: Argb = argb(255, 0, 0, 255);
const BLACK: Argb = argb(255, 0, 0, 0);
const YELLOW: Argb = argb(255, 255, 255, 0);

fn paint(grid: &mut PixelGrid, rect: Rect, pixel: Argb) {
    for y in rect.y..rect.y + rect.height {
        for x in rect.x..rect.x + rect.width {
            grid.set(x, y, pixel);
        }
    }
}

fn region(grid: &PixelGrid, rect: Rect) -> Vec<Argb> {
    (rect.y..rect.y + rect.height)
        .flat_map(|y| (rect.x..rect.x + rect.width).map(move |x| (x, y)))
        .filter_map(|(x, y)| grid.get(x, y))
        .collect()
}

fn modern_skin(head_overlay: Argb) -> PixelGrid {
    let mut skin = PixelGrid::new(64, 64);
    paint(&mut skin, Rect::new(8, 8, 8, 8), RED);
    paint(&mut skin, Rect::new(40, 8, 8, 8), head_overlay);
    paint(&mut skin, Rect::new(20, 20, 8, 12), BLUE);
    skin
}

#[test]
fn green_head_overlay_replaces_base_at_every_zoom() {
    let skin = modern_skin(GREEN);
    let head = composite_head(&skin, true).unwrap();
    assert_eq!(head, PixelGrid::filled(8, 8, GREEN));

    for zoom in [1, 2, 8] {
        assert_eq!(scale(&head, zoom).unwrap(), PixelGrid::filled(8 * zoom, 8 * zoom, GREEN));
    }
}

#[test]
fn black_head_overlay_is_treated_as_empty() {
    let skin = modern_skin(BLACK);
    assert_eq!(composite_head(&skin, true).unwrap(), PixelGrid::filled(8, 8, RED));
}

#[test]
fn legacy_right_arm_is_mirrored_to_the_left() {
    let mut skin = PixelGrid::new(64, 32);
    paint(&mut skin, Rect::new(44, 20, 4, 12), YELLOW);
    assert_eq!(detect_layout(&skin), Some(SkinLayout::Legacy));

    let model = composite_model(&skin, SkinLayout::Legacy, true).unwrap();
    assert_eq!(region(&model, Rect::new(0, 8, 4, 12)), vec![YELLOW; 48]);
    assert_eq!(region(&model, Rect::new(12, 8, 4, 12)), vec![YELLOW; 48]);
    assert_eq!(region(&model, Rect::new(4, 8, 8, 12)), vec![0; 96]);
}

#[test]
fn modern_model_keeps_torso_base_under_empty_overlay() {
    let skin = modern_skin(GREEN);
    let model = composite_model(&skin, SkinLayout::Modern, true).unwrap();
    assert_eq!(model.dimensions(), (16, 32));
    assert_eq!(region(&model, Rect::new(4, 0, 8, 8)), vec![GREEN; 64]);
    // El área de la capa exterior del torso está vacía (transparente negra).
    assert_eq!(region(&model, Rect::new(4, 8, 8, 12)), vec![BLUE; 96]);
}

#[test]
fn head_png_pipeline_matches_in_memory_render() {
    let skin = modern_skin(GREEN);
    let png = render_skin_head_png(encode_png(&skin).unwrap(), 4, true).unwrap();
    let decoded = decode_skin_bytes(&png).unwrap();
    assert_eq!(decoded, PixelGrid::filled(32, 32, GREEN));
}
