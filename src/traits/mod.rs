pub mod camera;
pub mod collision;
pub mod controller;

pub use camera::*;
pub use collision::*;
pub use controller::*;
