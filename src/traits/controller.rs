/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
    Shift,
    Escape,
    MouseLeft,
    MouseRight,
}

/// Polled input state, read once per tick
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons, in press order
    fn get_down_keys(&self) -> &[Button];

    /// Pointer motion since the last reset, y positive when moving up
    fn pointer_delta(&self) -> (f32, f32);

    /// Vertical scroll since the last reset, positive away from the user
    fn scroll_delta(&self) -> f32;
}
