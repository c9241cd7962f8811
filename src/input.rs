use crate::core::movement::Movement;
use crate::traits::{Button, Controller};

/// Key bindings, in the order intents are applied each tick
pub static BINDINGS: [(Button, Movement); 6] = [
    (Button::KeyW, Movement::Forward),
    (Button::KeyS, Movement::Backward),
    (Button::KeyA, Movement::Left),
    (Button::KeyD, Movement::Right),
    (Button::Space, Movement::Up),
    (Button::Shift, Movement::Down),
];

/// Fixed set of held keys with no pointer motion, for scripted runs
#[derive(Debug, Clone, Default)]
pub struct HeldKeys(pub Vec<Button>);

impl HeldKeys {
    pub fn new(buttons: &[Button]) -> Self {
        Self(buttons.to_vec())
    }
}

impl Controller for HeldKeys {
    fn is_down(&self, button: Button) -> bool {
        self.0.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.0
    }

    fn pointer_delta(&self) -> (f32, f32) {
        (0.0, 0.0)
    }

    fn scroll_delta(&self) -> f32 {
        0.0
    }
}

/// Movement intents for every held key
pub fn intents<C: Controller + ?Sized>(controller: &C) -> impl Iterator<Item = Movement> + '_ {
    BINDINGS
        .iter()
        .filter(move |(button, _)| controller.is_down(*button))
        .map(|&(_, movement)| movement)
}
