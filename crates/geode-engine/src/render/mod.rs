//! GPU rendering subsystem.
//!
//! Owns the two shading programs (instanced 2D outline, depth-tested 3D
//! colored triangles), their vertex layouts, and the buffers scenes write
//! into each frame. Scenes own their renderer state; nothing here is global.
//!
//! Conventions:
//! - 2D content lives in a world space where the shorter surface axis spans
//!   `[-2.5, 2.5]`, +Y up.
//! - 3D content uses a right-handed world, `[0, 1]` clip depth.

mod buffers;
mod common;
mod ctx;
mod depth;
mod pipelines;
mod shaders;

pub use buffers::{clamp_to_capacity, BufferManager, GeometryBuffers};
pub use common::{FlowerUniforms, SolidUniforms};
pub use ctx::{RenderCtx, RenderTarget};
pub use depth::{DepthTarget, DEPTH_FORMAT};
pub use pipelines::{OutlinePipeline, PolygonVariant, SolidPipeline};
