use sdl2::pixels::Color;
use std::time::Duration;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const WINDOW_TITLE: &str = "PullTrolley";

pub const TICK_RATE: u32 = 30;
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

pub const BACKGROUND_COLOR: Color = Color { r: 128, g: 128, b: 128, a: 0xff };
pub const VEHICLE_COLOR: Color = Color { r: 255, g: 255, b: 255, a: 0xff };

// Vehicle body
pub const VEHICLE_WIDTH: f64 = 30.0;
pub const WHEELBASE_LENGTH: f64 = 50.0;

// Starting pose, centre of the window facing up the screen
pub const INITIAL_X: f64 = 400.0;
pub const INITIAL_Y: f64 = 300.0;
pub const INITIAL_HEADING: f64 = 0.0;

// Size of one key impulse
pub const VELOCITY_STEP: f64 = 1.0;
pub const STEER_STEP: f64 = 0.5;
