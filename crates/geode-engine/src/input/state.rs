use std::collections::HashSet;

use glam::Vec2;

use super::frame::InputFrame;
use super::types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Pixels treated as one wheel line for touchpad (pixel) deltas.
const PIXELS_PER_LINE: f32 = 40.0;

/// Current input state for a single window.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,

    /// Physical pixels. `None` while the pointer is outside the window.
    pub pointer_pos: Option<Vec2>,

    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies `ev` to the current state and records transitions in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases are not delivered to unfocused windows.
                    for b in self.buttons_down.drain() {
                        frame.buttons_released.insert(b);
                    }
                    self.keys_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                let pos = Vec2::new(*x, *y);
                if let Some(prev) = self.pointer_pos {
                    frame.pointer_delta += pos - prev;
                }
                self.pointer_pos = Some(pos);
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key {
                key,
                state,
                modifiers,
                ..
            } => {
                self.modifiers = *modifiers;
                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }

            InputEvent::PointerButton(PointerButtonEvent {
                button,
                state,
                x,
                y,
                modifiers,
            }) => {
                self.pointer_pos = Some(Vec2::new(*x, *y));
                self.modifiers = *modifiers;
                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }

            InputEvent::MouseWheel { delta, modifiers } => {
                self.modifiers = *modifiers;
                frame.wheel_lines += delta.lines_y(PIXELS_PER_LINE);
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseWheelDelta;

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    fn button(state: MouseButtonState) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state,
            x: 0.0,
            y: 0.0,
            modifiers: Modifiers::default(),
        })
    }

    #[test]
    fn pointer_delta_accumulates_within_frame() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, moved(10.0, 10.0));
        state.apply_event(&mut frame, moved(15.0, 12.0));
        state.apply_event(&mut frame, moved(25.0, 8.0));
        assert_eq!(frame.pointer_delta, Vec2::new(15.0, -2.0));
    }

    #[test]
    fn first_move_has_no_delta() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, moved(100.0, 100.0));
        assert_eq!(frame.pointer_delta, Vec2::ZERO);
    }

    #[test]
    fn press_and_release_are_recorded_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, button(MouseButtonState::Pressed));
        state.apply_event(&mut frame, button(MouseButtonState::Pressed));
        assert!(frame.buttons_pressed.contains(&MouseButton::Left));
        assert!(state.button_down(MouseButton::Left));
        state.apply_event(&mut frame, button(MouseButtonState::Released));
        assert!(frame.buttons_released.contains(&MouseButton::Left));
        assert!(!state.button_down(MouseButton::Left));
    }

    #[test]
    fn held_modifier_key_stays_down_across_frames() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let shift = |ks: KeyState| InputEvent::Key {
            key: Key::Shift,
            state: ks,
            modifiers: Modifiers::default(),
            repeat: false,
        };
        state.apply_event(&mut frame, shift(KeyState::Pressed));
        frame.clear();
        assert!(state.key_down(Key::Shift));
        state.apply_event(&mut frame, shift(KeyState::Released));
        assert!(!state.key_down(Key::Shift));
        assert!(frame.keys_released.contains(&Key::Shift));
    }

    #[test]
    fn focus_loss_releases_held_buttons() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, button(MouseButtonState::Pressed));
        frame.clear();
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(frame.buttons_released.contains(&MouseButton::Left));
        assert!(state.buttons_down.is_empty());
    }

    #[test]
    fn wheel_converts_pixels_to_lines() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(
            &mut frame,
            InputEvent::MouseWheel {
                delta: MouseWheelDelta::Line { x: 0.0, y: 2.0 },
                modifiers: Modifiers::default(),
            },
        );
        state.apply_event(
            &mut frame,
            InputEvent::MouseWheel {
                delta: MouseWheelDelta::Pixel { x: 0.0, y: 20.0 },
                modifiers: Modifiers::default(),
            },
        );
        assert_eq!(frame.wheel_lines, 2.5);
    }
}
