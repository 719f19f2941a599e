use sdl2::event::Event as SdlEvent;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::EventPump;

use crate::constants::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::geometry::Point2;

/// Keys the simulation distinguishes; everything else collapses to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Up,
    Down,
    Left,
    Right,
    Space,
    Other,
}

impl From<Keycode> for Key {
    fn from(keycode: Keycode) -> Self {
        match keycode {
            Keycode::Escape => Key::Escape,
            Keycode::Up => Key::Up,
            Keycode::Down => Key::Down,
            Keycode::Left => Key::Left,
            Keycode::Right => Key::Right,
            Keycode::Space => Key::Space,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Close,
    KeyDown(Key),
    KeyUp(Key),
}

/// Something the simulation can draw a frame onto.
pub trait Surface {
    fn clear(&mut self, color: Color) -> Result<(), String>;
    /// Draws straight segments through `points` and back to the first one.
    fn draw_closed_polyline(&mut self, color: Color, points: &[Point2]) -> Result<(), String>;
    fn present(&mut self) -> Result<(), String>;
}

pub trait EventSource {
    /// Drains everything queued since the last poll, oldest first.
    fn poll_events(&mut self) -> Vec<Event>;
}

/// Maps a raw SDL event onto the simulation's event set. Events the
/// simulation has no use for (mouse, window resizes, unknown keycodes) yield
/// `None`.
pub fn translate_event(event: &SdlEvent) -> Option<Event> {
    match event {
        SdlEvent::Quit { .. } => Some(Event::Close),
        SdlEvent::KeyDown { keycode: Some(keycode), .. } => Some(Event::KeyDown(Key::from(*keycode))),
        SdlEvent::KeyUp { keycode: Some(keycode), .. } => Some(Event::KeyUp(Key::from(*keycode))),
        _ => None,
    }
}

pub struct SdlSurface {
    canvas: Canvas<Window>,
}

impl SdlSurface {
    pub fn new(canvas: Canvas<Window>) -> Self {
        SdlSurface { canvas }
    }
}

impl Surface for SdlSurface {
    fn clear(&mut self, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
        Ok(())
    }

    fn draw_closed_polyline(&mut self, color: Color, points: &[Point2]) -> Result<(), String> {
        let Some(first) = points.first() else {
            return Ok(());
        };

        let mut pixels: Vec<Point> = points.iter().map(Point2::to_pixel).collect();
        pixels.push(first.to_pixel());

        self.canvas.set_draw_color(color);
        self.canvas.draw_lines(pixels.as_slice())
    }

    fn present(&mut self) -> Result<(), String> {
        self.canvas.present();
        Ok(())
    }
}

pub struct SdlEvents {
    event_pump: EventPump,
}

impl SdlEvents {
    pub fn new(event_pump: EventPump) -> Self {
        SdlEvents { event_pump }
    }
}

impl EventSource for SdlEvents {
    fn poll_events(&mut self) -> Vec<Event> {
        self.event_pump
            .poll_iter()
            .filter_map(|event| translate_event(&event))
            .collect()
    }
}

/// Brings up SDL, opens the simulation window and hands back the drawing
/// surface together with its event queue.
pub fn create_window() -> Result<(SdlSurface, SdlEvents), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .map_err(|e| e.to_string())?;

    let event_pump = sdl_context.event_pump()?;

    log::info!(
        "Opened {}x{} window \"{}\" ({})",
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        WINDOW_TITLE,
        video_subsystem.current_video_driver()
    );

    Ok((SdlSurface::new(canvas), SdlEvents::new(event_pump)))
}
