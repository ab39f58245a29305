use crate::{Distance, Orientation, Point};

/// The straight line between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<'a> {
    /// The first point in the segment.
    pub from: &'a Point,
    /// The last point in the segment.
    pub to: &'a Point,
}

impl<'a> From<(&'a Point, &'a Point)> for Segment<'a> {
    fn from((from, to): (&'a Point, &'a Point)) -> Self {
        Self { from, to }
    }
}

impl Segment<'_> {
    /// Returns the distance between the two endpoints of the segment.
    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }

    /// Returns the local frame of the segment for a boundary with the given orientation.
    pub fn frame(&self, orientation: Orientation) -> Frame {
        let tangent = (*self.to - *self.from).normalized();
        let normal = match orientation {
            Orientation::Clockwise => tangent.perpendicular(),
            Orientation::CounterClockwise => -tangent.perpendicular(),
        };

        Frame {
            origin: *self.from,
            tangent,
            normal,
            length: self.length(),
        }
    }
}

/// A one-dimensional axis laid over a [`Segment`], with an outward normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// The first endpoint of the segment.
    pub origin: Point,
    /// The unit vector from the first endpoint towards the last one.
    pub tangent: Point,
    /// The unit vector pointing out of the boundary the segment belongs to.
    pub normal: Point,
    /// The length of the segment.
    pub length: f64,
}

impl Frame {
    /// Returns the canvas point at `along` units from the origin and `out` units away from the
    /// boundary.
    pub fn point(&self, along: f64, out: f64) -> Point {
        self.origin + self.tangent * along + self.normal * out
    }
}
