use pull_trolley::constants::{TICK_RATE, WINDOW_HEIGHT, WINDOW_WIDTH};
use pull_trolley::input::print_controls;
use pull_trolley::platform;
use pull_trolley::Simulation;

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!(
        "Starting Pull Trolley: {}x{} window at {} ticks per second",
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        TICK_RATE
    );
    print_controls();

    let (surface, events) = platform::create_window()?;
    let mut simulation = Simulation::new(surface, events)?;
    simulation.run()
}
