//! Miscellaneous helper functions for working with vectors.

use angle::Angle;

use crate::V2;

/// Returns the point `radius` units from the origin along `angle`, measured anticlockwise from
/// the positive x-axis.
pub fn polar(radius: f32, angle: impl Angle<f32> + Copy) -> V2 {
    V2::new(angle.cos(), angle.sin()) * radius
}

/// Returns the bounding box of a set of points as a (min, max) pair of vectors.  Returns `None`
/// if the iterator didn't yield any points.
pub fn bbox(points: impl IntoIterator<Item = V2>) -> Option<(V2, V2)> {
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let (mut min, mut max) = (first, first);
    for v in iter {
        min.x = min.x.min(v.x);
        min.y = min.y.min(v.y);
        max.x = max.x.max(v.x);
        max.y = max.y.max(v.y);
    }
    Some((min, max))
}
