//! Time-driven animation of the circle pattern.

mod easing;
mod timeline;

pub use easing::smoothstep;
pub use timeline::{FlowerTimeline, InstanceRecord, Ring, TimelineConfig, ALPHA_EPSILON};
