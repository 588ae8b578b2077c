//! Render 2D de skins: detección de formato, composición por regiones y escalado.
//!
//! Todas las operaciones reciben el atlas por referencia y devuelven un lienzo nuevo.

pub mod compositor;
pub mod layout;
pub mod pixel_grid;
pub mod regions;
pub mod resize;

pub use compositor::{composite_head, composite_model};
pub use layout::{detect_layout, require_layout, SkinLayout};
pub use pixel_grid::{argb, Argb, PixelGrid, Rect};
pub use resize::{flip_horizontal, scale};
