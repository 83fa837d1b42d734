//! Procedural geometry factories.
//!
//! Everything here is pure CPU code: no device, no queue. Renderers upload
//! the resulting arrays through `render::buffers`.

mod circle;
mod palette;
mod solid;

pub use circle::{make_circle_outline, flower_centers, CircleOutline, OutlineVertex, FLOWER_CIRCLE_COUNT};
pub use palette::Palette;
pub use solid::{make_solid, Mesh, SolidKind, SolidVertex};
