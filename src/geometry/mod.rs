pub mod point;
pub mod rect;

pub use point::Point2;
pub use rect::rotated_rect_corners;
