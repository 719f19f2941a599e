use sdl2::rect::Point;

/// A position in window space, in pixels. Y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }

    pub fn distance_to(&self, other: &Point2) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Snaps to the nearest pixel for the SDL line primitives.
    pub fn to_pixel(&self) -> Point {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }
}
