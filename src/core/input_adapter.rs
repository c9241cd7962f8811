use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::{Button, Controller};

/// Pixels per scroll "line" when a touchpad reports pixel deltas
const PIXELS_PER_LINE: f32 = 40.0;

/// Adapter that folds winit window events into polled input state
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// Same buttons in press order (for get_down_keys)
    pressed_vec: Vec<Button>,
    /// Last cursor position; `None` until the first cursor event
    mouse_position: Option<(f32, f32)>,
    /// Pointer movement since last reset, y reversed
    mouse_delta: (f32, f32),
    /// Set once raw device motion arrives; cursor positions then stop feeding the delta
    raw_motion: bool,
    scroll_delta: f32,
}

impl WinitController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_pressed(button, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    MouseButton::Left => Button::MouseLeft,
                    MouseButton::Right => Button::MouseRight,
                    _ => return,
                };
                self.set_pressed(button, *state);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll_delta += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
            }
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    fn set_pressed(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                }
            }
        }
    }

    /// Process a winit DeviceEvent; relative mouse motion is not bounded by the window
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.mouse_motion(*dx as f32, *dy as f32);
        }
    }

    fn mouse_motion(&mut self, dx: f32, dy: f32) {
        self.raw_motion = true;
        self.mouse_delta.0 += dx;
        // device y grows downward
        self.mouse_delta.1 -= dy;
    }

    /// The first position only seeds the tracker so the view does not jump
    fn cursor_moved(&mut self, x: f32, y: f32) {
        if let Some((last_x, last_y)) = self.mouse_position {
            if !self.raw_motion {
                self.mouse_delta.0 += x - last_x;
                // window y grows downward
                self.mouse_delta.1 += last_y - y;
            }
        }
        self.mouse_position = Some((x, y));
    }

    /// Drop held keys, e.g. when focus is lost mid-press
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
    }

    /// Reset per-frame state (pointer and scroll deltas).
    /// Call this at the end of each tick after input has been consumed.
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
    }

    pub fn mouse_position(&self) -> Option<(f32, f32)> {
        self.mouse_position
    }

    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::Space => Some(Button::Space),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }

    fn pointer_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }
}
