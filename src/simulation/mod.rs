pub mod frame_clock;

pub use frame_clock::FrameClock;

use crate::constants::{
    BACKGROUND_COLOR, INITIAL_HEADING, INITIAL_X, INITIAL_Y, TICK_DURATION, WHEELBASE_LENGTH,
};
use crate::input::{InputAction, InputHandler};
use crate::platform::{EventSource, Surface};
use crate::vehicle::{Body, VehicleState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Owns the window, its event queue and everything simulated in it.
pub struct Simulation<S: Surface, E: EventSource> {
    surface: S,
    events: E,
    bodies: Vec<Box<dyn Body>>,
    input_handler: InputHandler,
    state: LoopState,
    ticks: u64,
}

impl<S: Surface, E: EventSource> Simulation<S, E> {
    pub fn new(mut surface: S, events: E) -> Result<Self, String> {
        surface.clear(BACKGROUND_COLOR)?;

        let mut simulation = Simulation {
            surface,
            events,
            bodies: Vec::new(),
            input_handler: InputHandler::new(),
            state: LoopState::Running,
            ticks: 0,
        };
        simulation.create_bodies();
        Ok(simulation)
    }

    fn create_bodies(&mut self) {
        let car = VehicleState::new(INITIAL_X, INITIAL_Y, INITIAL_HEADING, WHEELBASE_LENGTH);
        self.bodies.push(Box::new(car));
    }

    pub fn add_body(&mut self, body: Box<dyn Body>) {
        self.bodies.push(body);
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Runs ticks at the fixed rate until the window is closed or Escape
    /// is released.
    pub fn run(&mut self) -> Result<(), String> {
        let mut clock = FrameClock::new(TICK_DURATION);

        while self.state == LoopState::Running {
            clock.start_tick();
            self.step()?;
            clock.wait_for_next_tick();
        }

        log::info!(
            "Simulation finished after {} ticks ({} key releases handled)",
            self.ticks,
            self.input_handler.releases_seen()
        );
        Ok(())
    }

    /// One tick: physics, then drawing, then the input gathered since the
    /// previous tick. Input therefore only shows up on screen a tick later.
    pub fn step(&mut self) -> Result<(), String> {
        self.surface.clear(BACKGROUND_COLOR)?;

        for body in self.bodies.iter_mut() {
            body.advance();
        }

        for body in &self.bodies {
            body.draw(&mut self.surface)?;
        }

        self.surface.present()?;
        self.ticks += 1;

        self.handle_events();
        Ok(())
    }

    fn handle_events(&mut self) {
        for event in self.events.poll_events() {
            match self.input_handler.process_event(&event) {
                InputAction::Exit => self.terminate(),
                InputAction::Control(command) => {
                    for body in self.bodies.iter_mut() {
                        body.control(command);
                    }
                }
                InputAction::None => {}
            }
        }
    }

    fn terminate(&mut self) {
        if self.state == LoopState::Running {
            log::info!("Exit requested on tick {}", self.ticks);
            self.state = LoopState::Terminated;
        }
    }
}
