use super::{layout::SkinLayout, pixel_grid::Rect};

pub const HEAD_SIZE: (u32, u32) = (8, 8);
pub const MODEL_SIZE: (u32, u32) = (16, 32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Head,
    Torso,
    RightArm,
    LeftArm,
    RightLeg,
    LeftLeg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Rectángulo leído directamente del atlas.
    Atlas(Rect),
    /// Espejo horizontal de la capa base ya extraída de otra parte.
    MirrorOf(BodyPart),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub part: BodyPart,
    pub source: Source,
    pub dst: (u32, u32),
}

const fn atlas(part: BodyPart, x: u32, y: u32, w: u32, h: u32, dst: (u32, u32)) -> Placement {
    Placement {
        part,
        source: Source::Atlas(Rect::new(x, y, w, h)),
        dst,
    }
}

const fn mirror(part: BodyPart, of: BodyPart, dst: (u32, u32)) -> Placement {
    Placement {
        part,
        source: Source::MirrorOf(of),
        dst,
    }
}

/// Capas de un render: la base se copia opaca, la exterior con la regla de relleno.
#[derive(Debug, Clone, Copy)]
pub struct RegionTable {
    pub base: &'static [Placement],
    pub overlay: &'static [Placement],
}

pub const HEAD_ICON: RegionTable = RegionTable {
    base: &[atlas(BodyPart::Head, 8, 8, 8, 8, (0, 0))],
    overlay: &[atlas(BodyPart::Head, 40, 8, 8, 8, (0, 0))],
};

// Las partes espejadas van después de su contraparte.
pub const LEGACY_MODEL: RegionTable = RegionTable {
    base: &[
        atlas(BodyPart::Head, 8, 8, 8, 8, (4, 0)),
        atlas(BodyPart::Torso, 20, 20, 8, 12, (4, 8)),
        atlas(BodyPart::RightArm, 44, 20, 4, 12, (0, 8)),
        mirror(BodyPart::LeftArm, BodyPart::RightArm, (12, 8)),
        atlas(BodyPart::RightLeg, 4, 20, 4, 12, (4, 20)),
        mirror(BodyPart::LeftLeg, BodyPart::RightLeg, (8, 20)),
    ],
    overlay: &[atlas(BodyPart::Head, 40, 8, 8, 8, (4, 0))],
};

pub const MODERN_MODEL: RegionTable = RegionTable {
    base: &[
        atlas(BodyPart::Head, 8, 8, 8, 8, (4, 0)),
        atlas(BodyPart::Torso, 20, 20, 8, 12, (4, 8)),
        atlas(BodyPart::RightArm, 44, 20, 4, 12, (0, 8)),
        atlas(BodyPart::LeftArm, 36, 52, 4, 12, (12, 8)),
        atlas(BodyPart::RightLeg, 4, 20, 4, 12, (4, 20)),
        atlas(BodyPart::LeftLeg, 20, 52, 4, 12, (8, 20)),
    ],
    overlay: &[
        atlas(BodyPart::Head, 40, 8, 8, 8, (4, 0)),
        atlas(BodyPart::Torso, 20, 32, 8, 12, (4, 8)),
        atlas(BodyPart::RightArm, 44, 32, 4, 12, (0, 8)),
        atlas(BodyPart::LeftArm, 52, 52, 4, 12, (12, 8)),
        atlas(BodyPart::RightLeg, 4, 36, 4, 12, (4, 20)),
        atlas(BodyPart::LeftLeg, 4, 52, 4, 12, (8, 20)),
    ],
};

pub fn model_table(layout: SkinLayout) -> &'static RegionTable {
    match layout {
        SkinLayout::Legacy => &LEGACY_MODEL,
        SkinLayout::Modern => &MODERN_MODEL,
    }
}

#[cfg(test)]
mod tests {
    use super::{model_table, BodyPart, Placement, Source, HEAD_ICON, MODEL_SIZE};
    use crate::domain::skin::layout::SkinLayout;

    fn fits(placements: &[Placement], layout: SkinLayout) -> bool {
        let (atlas_w, atlas_h) = layout.dimensions();
        placements.iter().all(|placement| match placement.source {
            Source::Atlas(rect) => rect.x + rect.width <= atlas_w && rect.y + rect.height <= atlas_h,
            Source::MirrorOf(_) => true,
        })
    }

    #[test]
    fn atlas_rectangles_stay_inside_their_layout() {
        for layout in [SkinLayout::Legacy, SkinLayout::Modern] {
            let table = model_table(layout);
            assert!(fits(table.base, layout));
            assert!(fits(table.overlay, layout));
        }
        assert!(fits(HEAD_ICON.base, SkinLayout::Legacy));
        assert!(fits(HEAD_ICON.overlay, SkinLayout::Legacy));
    }

    #[test]
    fn every_part_has_a_base_placement() {
        for layout in [SkinLayout::Legacy, SkinLayout::Modern] {
            let table = model_table(layout);
            for part in [
                BodyPart::Head,
                BodyPart::Torso,
                BodyPart::RightArm,
                BodyPart::LeftArm,
                BodyPart::RightLeg,
                BodyPart::LeftLeg,
            ] {
                assert_eq!(
                    table.base.iter().filter(|p| p.part == part).count(),
                    1,
                    "{layout:?} {part:?}"
                );
            }
        }
    }

    #[test]
    fn mirrors_follow_their_counterpart() {
        let table = model_table(SkinLayout::Legacy);
        for (index, placement) in table.base.iter().enumerate() {
            if let Source::MirrorOf(of) = placement.source {
                assert!(table.base[..index].iter().any(|p| p.part == of));
            }
        }
    }

    #[test]
    fn legacy_overlay_only_covers_the_head() {
        let overlay = model_table(SkinLayout::Legacy).overlay;
        assert_eq!(overlay.len(), 1);
        assert_eq!(overlay[0].part, BodyPart::Head);
        assert_eq!(model_table(SkinLayout::Modern).overlay.len(), 6);
    }

    #[test]
    fn destinations_fit_the_model_canvas() {
        for layout in [SkinLayout::Legacy, SkinLayout::Modern] {
            for placement in model_table(layout).base {
                let (x, y) = placement.dst;
                assert!(x < MODEL_SIZE.0 && y < MODEL_SIZE.1);
            }
        }
    }
}
