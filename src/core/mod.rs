pub mod collision;
pub mod input_adapter;
pub mod movement;
pub mod timer;

pub use input_adapter::WinitController;
pub use timer::Throttled;
