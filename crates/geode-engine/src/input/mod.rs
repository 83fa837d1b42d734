//! Input subsystem.
//!
//! The public API does not expose winit types; `platform` translates window
//! events into `InputEvent`s. `GestureTracker` turns accumulated drag and
//! pinch reports into the per-event deltas the orbit camera consumes.

mod frame;
mod gesture;
pub(crate) mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use gesture::GestureTracker;
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
};
