use nalgebra::{Translation2, UnitComplex};

use super::{Isometry2, Point2, TOLERANCE};

/// Solves the rigid transform that carries segment `from` onto segment `to`.
///
/// The rotation maps the direction of `from` onto the direction of `to`
/// and the translation then pins `from[0]` onto `to[0]`. No scaling and no
/// reflection is involved, so polygon winding is preserved. When the two
/// segments differ in length only the first endpoint coincides exactly;
/// callers compare lengths beforehand.
///
/// Returns `None` if either segment is shorter than [`TOLERANCE`].
#[must_use]
pub fn align_segment(from: [Point2; 2], to: [Point2; 2]) -> Option<Isometry2> {
    let src = from[1] - from[0];
    let dst = to[1] - to[0];
    if src.norm() < TOLERANCE || dst.norm() < TOLERANCE {
        return None;
    }

    let angle = dst.y.atan2(dst.x) - src.y.atan2(src.x);
    let rotation = UnitComplex::new(angle);
    let translation = to[0].coords - rotation * from[0].coords;

    Some(Isometry2::from_parts(
        Translation2::from(translation),
        rotation,
    ))
}
