use nalgebra::Vector2;

use std::f64::consts::PI;

/// Angle of v measured counter-clockwise from the positive x-axis, in [0, 2pi).
pub fn polar_angle(v: &Vector2<f64>) -> f64 {
    let theta = v.y.atan2(v.x);
    if theta < 0.0 {
        theta + 2.0 * PI
    } else {
        theta
    }
}

pub fn signed_angle(u: &Vector2<f64>, v: &Vector2<f64>) -> f64 {
    // Returns the angle that rotates u onto v, in (-pi, pi]. Positive is
    // counter-clockwise.
    let cross = u.x * v.y - u.y * v.x;
    cross.atan2(u.dot(v))
}

/// Total angle swept around the origin by a path, counting full turns.
///
/// Consecutive points must be less than half a turn apart for this to be
/// meaningful.
pub fn swept_angle<I>(points: I) -> f64
where
    I: IntoIterator<Item = Vector2<f64>>,
{
    let mut points = points.into_iter();
    let mut previous = match points.next() {
        Some(p) => p,
        None => return 0.0,
    };

    let mut total = 0.0;
    for point in points {
        total += signed_angle(&previous, &point);
        previous = point;
    }
    total
}
