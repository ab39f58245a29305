use crate::{Point, builder::Direction};

/// Returns the unit vector of the segment between the given points, travelling along the given
/// axis.
///
/// A segment with no length points towards the positive side of its axis.
fn heading(direction: Direction, from: &Point, to: &Point) -> Point {
    let delta = direction.along(to) - direction.along(from);
    let sign = if delta < 0. { -1. } else { 1. };

    match direction {
        Direction::Horizontal => Point { x: sign, y: 0. },
        Direction::Vertical => Point { x: 0., y: sign },
    }
}

/// Returns the closed polygon enclosing the orthogonal path `start, corners.., current` at the
/// given offset on each side.
pub(super) fn ribbon(
    start: Point,
    corners: &[Point],
    current: Point,
    initial: Direction,
    offset: f64,
) -> Vec<Point> {
    let vertices: Vec<Point> = std::iter::once(start)
        .chain(corners.iter().copied())
        .chain(std::iter::once(current))
        .collect();

    let mut direction = initial;
    let normals: Vec<Point> = vertices
        .windows(2)
        .map(|segment| {
            let normal = heading(direction, &segment[0], &segment[1]).perpendicular();
            direction = direction.flipped();
            normal
        })
        .collect();

    // The offset of a corner on each rail is the sum of the offsets of both segments meeting
    // at it.
    let shifts: Vec<Point> = normals
        .windows(2)
        .map(|pair| (pair[0] + pair[1]) * offset)
        .collect();

    let (first, last) = match (normals.first(), normals.last()) {
        (Some(first), Some(last)) => (*first * offset, *last * offset),
        _ => return Vec::new(),
    };

    let mut bounds = Vec::with_capacity(4 + 2 * corners.len());
    bounds.extend([start - first, start + first]);
    bounds.extend(corners.iter().zip(&shifts).map(|(corner, shift)| *corner + *shift));
    bounds.extend([current + last, current - last]);
    bounds.extend(
        corners
            .iter()
            .zip(&shifts)
            .rev()
            .map(|(corner, shift)| *corner - *shift),
    );

    bounds
}
