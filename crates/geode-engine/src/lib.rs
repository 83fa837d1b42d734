//! Geode engine crate.
//!
//! Procedural geometry rendering core: an instanced, time-animated circle
//! pattern and a depth-tested Platonic solid viewer with an orbit camera.
//! Also owns the platform + GPU runtime pieces used by host applications.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod geometry;
pub mod animation;
pub mod camera;
pub mod render;
pub mod scene;
