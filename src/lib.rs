pub mod constants;
pub mod geometry;
pub mod input;
pub mod platform;
pub mod simulation;
pub mod vehicle;

pub use input::{ControlCommand, InputAction, InputHandler};
pub use platform::{Event, EventSource, Key, Surface};
pub use simulation::{LoopState, Simulation};
pub use vehicle::{Body, VehicleState};
