use std::cmp::Ordering;

use crate::{Orientation, Point, RightHanded, Segment, determinant::Determinant};

/// A closed orthogonal polygon placed on the canvas.
///
/// The points are relative to the shape origin, `(x_pos, y_pos)`. The last point connects
/// back to the first one.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    /// The horizontal position of the shape origin.
    pub x_pos: f64,
    /// The vertical position of the shape origin.
    pub y_pos: f64,
    /// The rotation of the shape, in degrees. Geometry ignores it.
    pub rotation: f64,
    /// The ordered list of vertices describing the boundary, relative to the origin.
    pub points: Vec<Point>,
}

impl PartialEq for Shape {
    /// Two shapes are equal if, and only if, they are placed at the same origin and have the
    /// same vertices describing the same boundary.
    fn eq(&self, other: &Self) -> bool {
        let len = self.points.len();
        if self.x_pos != other.x_pos
            || self.y_pos != other.y_pos
            || self.rotation != other.rotation
            || len != other.points.len()
        {
            return false;
        }

        if len == 0 {
            return true;
        }

        let mut double = other.points.clone();
        double.extend_from_slice(&other.points);

        (0..len).any(|padding| double[padding..padding + len] == self.points)
    }
}

impl RightHanded for Shape {
    fn is_clockwise(&self) -> bool {
        self.points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                match a.y.partial_cmp(&b.y) {
                    Some(Ordering::Equal) => b.x.partial_cmp(&a.x),
                    other => other,
                }
                .unwrap_or(Ordering::Equal)
            })
            .map(|(mut position, min)| {
                // Avoids usize overflow when position = 0.
                position += self.points.len();

                Determinant::from([
                    &self.points[(position - 1) % self.points.len()],
                    min,
                    &self.points[(position + 1) % self.points.len()],
                ])
                .is_negative()
            })
            .unwrap_or_default()
    }
}

impl Shape {
    pub fn new(x_pos: f64, y_pos: f64, points: Vec<Point>) -> Self {
        Self {
            x_pos,
            y_pos,
            rotation: 0.,
            points,
        }
    }

    /// Returns the shape whose origin is the minimum coordinates of the given canvas points.
    pub fn from_absolute(points: Vec<Point>) -> Self {
        let origin = points
            .iter()
            .copied()
            .reduce(|min, point| Point {
                x: min.x.min(point.x),
                y: min.y.min(point.y),
            })
            .unwrap_or_default();

        Self::new(
            origin.x,
            origin.y,
            points.into_iter().map(|point| point - origin).collect(),
        )
    }

    /// Returns the canvas position of the shape origin.
    pub fn origin(&self) -> Point {
        Point {
            x: self.x_pos,
            y: self.y_pos,
        }
    }

    /// Returns the total amount of vertices in the shape.
    pub fn total_vertices(&self) -> usize {
        self.points.len()
    }

    /// Returns the vertices of the shape in canvas coordinates.
    pub fn absolute_points(&self) -> impl Iterator<Item = Point> + '_ {
        let origin = self.origin();
        self.points.iter().map(move |point| *point + origin)
    }

    /// Returns the orientation of the boundary.
    pub fn orientation(&self) -> Orientation {
        if self.is_clockwise() {
            Orientation::Clockwise
        } else {
            Orientation::CounterClockwise
        }
    }

    /// Returns the edge starting at the vertex with the given index, if any.
    pub fn edge(&self, index: usize) -> Option<Segment<'_>> {
        let from = self.points.get(index)?;
        let to = self.points.get((index + 1) % self.points.len())?;
        Some(Segment { from, to })
    }

    /// Returns an ordered iterator over all the edges of the shape, the last one closing the
    /// boundary.
    pub fn edges(&self) -> impl Iterator<Item = Segment<'_>> {
        self.points
            .iter()
            .zip(self.points.iter().cycle().skip(1))
            .map(|(from, to)| Segment { from, to })
    }

    /// Returns the vertex with the given index together with its previous and next vertices.
    pub fn corner(&self, index: usize) -> Option<[&Point; 3]> {
        let len = self.points.len();
        let at = self.points.get(index)?;
        Some([
            &self.points[(index + len - 1) % len],
            at,
            &self.points[(index + 1) % len],
        ])
    }
}

#[cfg(test)]
mod tests {
    use crate::{Orientation, Point, RightHanded, Shape};

    fn ribbon() -> Shape {
        Shape::new(
            0.,
            -12.5,
            vec![point!(0., 0.), point!(0., 25.), point!(96., 25.), point!(96., 0.)],
        )
    }

    #[test]
    fn shape_orientation() {
        struct Test {
            name: &'static str,
            shape: Shape,
            want: Orientation,
        }

        vec![
            Test {
                name: "drawn ribbon",
                shape: ribbon(),
                want: Orientation::Clockwise,
            },
            Test {
                name: "reversed ribbon",
                shape: Shape::new(
                    0.,
                    0.,
                    vec![point!(96., 0.), point!(96., 25.), point!(0., 25.), point!(0., 0.)],
                ),
                want: Orientation::CounterClockwise,
            },
            Test {
                name: "drawn l-shape",
                shape: Shape::new(
                    0.,
                    0.,
                    vec![
                        point!(0., 0.),
                        point!(0., 25.),
                        point!(87.5, 25.),
                        point!(87.5, 112.5),
                        point!(112.5, 112.5),
                        point!(112.5, 0.),
                    ],
                ),
                want: Orientation::Clockwise,
            },
        ]
        .into_iter()
        .for_each(|test| {
            assert_eq!(test.shape.orientation(), test.want, "{}", test.name);
            assert_eq!(
                test.shape.is_clockwise(),
                test.want == Orientation::Clockwise,
                "{}",
                test.name
            );
        });
    }

    #[test]
    fn shape_from_absolute() {
        let shape = Shape::from_absolute(vec![
            point!(10., -12.5),
            point!(10., 12.5),
            point!(106., 12.5),
            point!(106., -12.5),
        ]);

        assert_eq!(shape.origin(), point!(10., -12.5));
        assert_eq!(
            shape.absolute_points().collect::<Vec<_>>(),
            vec![
                point!(10., -12.5),
                point!(10., 12.5),
                point!(106., 12.5),
                point!(106., -12.5),
            ]
        );
    }

    #[test]
    fn shape_edges() {
        let shape = ribbon();
        let edges: Vec<(Point, Point)> = shape.edges().map(|edge| (*edge.from, *edge.to)).collect();

        assert_eq!(
            edges,
            vec![
                (point!(0., 0.), point!(0., 25.)),
                (point!(0., 25.), point!(96., 25.)),
                (point!(96., 25.), point!(96., 0.)),
                (point!(96., 0.), point!(0., 0.)),
            ]
        );

        assert_eq!(shape.edge(3).map(|edge| *edge.to), Some(point!(0., 0.)));
        assert_eq!(shape.edge(4), None);
        assert_eq!(
            shape.corner(0),
            Some([&point!(96., 0.), &point!(0., 0.), &point!(0., 25.)])
        );
    }

    #[test]
    fn shape_equality() {
        struct Test {
            name: &'static str,
            left: Shape,
            right: Shape,
            want: bool,
        }

        let mut rotated = ribbon();
        rotated.points.rotate_left(2);

        let mut moved = ribbon();
        moved.x_pos = 1.;

        vec![
            Test {
                name: "same shape",
                left: ribbon(),
                right: ribbon(),
                want: true,
            },
            Test {
                name: "starting at different vertex",
                left: ribbon(),
                right: rotated,
                want: true,
            },
            Test {
                name: "different origin",
                left: ribbon(),
                right: moved,
                want: false,
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = test.left == test.right;
            assert_eq!(got, test.want, "{}", test.name);
        });
    }
}
