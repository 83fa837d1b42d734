//! Small value types shared by geometry, renderers and hosts.
//!
//! Matrices and vectors come from `glam`; this module only adds the pieces
//! glam does not model (colors, surface extents).

mod color;
mod viewport;

pub use color::ColorRgba;
pub use viewport::Viewport;
