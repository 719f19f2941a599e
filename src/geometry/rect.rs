use super::point::Point2;

/// Corners of a `width` x `height` rectangle centred on `center` and rotated
/// by `angle` radians.
///
/// Each body-frame corner is turned into polar form, measured with
/// `atan2(px, py)` so that angle zero points along +y, rotated, and projected
/// back. Corners come out in the order
/// `(w/2, -h/2), (w/2, h/2), (-w/2, h/2), (-w/2, -h/2)`, which is a closed
/// loop when joined in sequence.
pub fn rotated_rect_corners(width: f64, height: f64, center: Point2, angle: f64) -> [Point2; 4] {
    let (hw, hh) = (width / 2.0, height / 2.0);
    let offsets = [(hw, -hh), (hw, hh), (-hw, hh), (-hw, -hh)];

    offsets.map(|(px, py)| {
        let alpha = px.atan2(py) + angle;
        let radius = (px * px + py * py).sqrt();
        Point2::new(center.x + radius * alpha.sin(), center.y + radius * alpha.cos())
    })
}
