use crate::platform::{Event, Key};

/// Discrete adjustments a key release applies to the driven vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    Accelerate,
    Decelerate,
    SteerLeft,
    SteerRight,
    Stop,
}

// Actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Control(ControlCommand),
    Exit,
}

/// Turns window events into simulation actions.
///
/// Only key releases steer the car, so holding a key down gives a single
/// impulse no matter how long it is held or how often the OS repeats it.
#[derive(Debug, Default)]
pub struct InputHandler {
    releases_seen: u64,
}

impl InputHandler {
    pub fn new() -> Self {
        InputHandler { releases_seen: 0 }
    }

    pub fn process_event(&mut self, event: &Event) -> InputAction {
        match event {
            Event::Close => InputAction::Exit,
            Event::KeyUp(key) => {
                self.releases_seen += 1;
                match key {
                    Key::Escape => InputAction::Exit,
                    Key::Up => InputAction::Control(ControlCommand::Accelerate),
                    Key::Down => InputAction::Control(ControlCommand::Decelerate),
                    Key::Left => InputAction::Control(ControlCommand::SteerLeft),
                    Key::Right => InputAction::Control(ControlCommand::SteerRight),
                    Key::Space => InputAction::Control(ControlCommand::Stop),
                    Key::Other => InputAction::None,
                }
            }
            Event::KeyDown(_) => InputAction::None,
        }
    }

    pub fn releases_seen(&self) -> u64 {
        self.releases_seen
    }
}

// Helper function to print control instructions
pub fn print_controls() {
    println!("╔══════════════════════════════════════╗");
    println!("║          PULL TROLLEY CONTROLS       ║");
    println!("╠══════════════════════════════════════╣");
    println!("║ ↑ Arrow Up    │ Speed up by 1        ║");
    println!("║ ↓ Arrow Down  │ Slow down by 1       ║");
    println!("║ ← Arrow Left  │ Steer left 0.5 rad   ║");
    println!("║ → Arrow Right │ Steer right 0.5 rad  ║");
    println!("║ Space         │ Stop and straighten  ║");
    println!("║ Esc           │ Exit simulation      ║");
    println!("╚══════════════════════════════════════╝");
    println!("Controls act when the key is released.");
}
