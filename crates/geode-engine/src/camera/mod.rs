//! Orbit camera around the origin.

mod orbit;

pub use orbit::{CameraConfig, OrbitCamera};
