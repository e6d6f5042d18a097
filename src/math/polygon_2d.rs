use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Interior angle at vertex `i` of a polygon, in radians.
///
/// Measured counter-clockwise from the outgoing edge to the incoming edge,
/// so convex corners of a CCW polygon are below `PI`.
#[must_use]
pub fn interior_angle_2d(points: &[Point2], i: usize) -> f64 {
    let n = points.len();
    let prev = points[(i + n - 1) % n];
    let next = points[(i + 1) % n];
    let to_next = next - points[i];
    let to_prev = prev - points[i];
    let cross = to_next.x * to_prev.y - to_next.y * to_prev.x;
    let angle = cross.atan2(to_next.dot(&to_prev));
    if angle < 0.0 {
        angle + std::f64::consts::TAU
    } else {
        angle
    }
}

/// Returns the component-wise minimum and maximum of a point set.
#[must_use]
pub fn extent_2d<'a>(points: impl IntoIterator<Item = &'a Point2>) -> Option<(Point2, Point2)> {
    let mut iter = points.into_iter();
    let first = *iter.next()?;
    let (mut min, mut max) = (first, first);
    for p in iter {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}
