use std::collections::HashMap;

use tracing::debug;

use crate::{
    Config, Distance, PIXELS_PER_INCH, Point, Shape,
    corner::{CornerModification, CornerOffsets},
    modification::{EdgeModification, Generator},
};

/// Returns the length of the edge between `p1` and `p2`, in inches, once its ends have been
/// trimmed by the given corner offsets.
pub fn edge_display_length(
    p1: &Point,
    p2: &Point,
    start_offset: f64,
    end_offset: f64,
    pixels_per_inch: f64,
) -> f64 {
    let pixels_per_inch = if pixels_per_inch.is_finite() && pixels_per_inch > 0. {
        pixels_per_inch
    } else {
        PIXELS_PER_INCH
    };

    let length = p1.distance(p2) - start_offset.max(0.) - end_offset.max(0.);
    length.max(0.) / pixels_per_inch
}

/// The rendered boundary of a [`Shape`] decorated with edge and corner modifications.
///
/// Edges are identified by the index of their first vertex, and corners by the index of their
/// vertex.
#[derive(Debug, Clone)]
pub struct Outline<'a> {
    shape: &'a Shape,
    edges: HashMap<usize, Vec<EdgeModification>>,
    corners: HashMap<usize, CornerModification>,
    arc_segments: usize,
    pixels_per_inch: f64,
}

impl<'a> From<&'a Shape> for Outline<'a> {
    fn from(shape: &'a Shape) -> Self {
        Self {
            shape,
            edges: HashMap::new(),
            corners: HashMap::new(),
            arc_segments: Config::default().arc_segments,
            pixels_per_inch: PIXELS_PER_INCH,
        }
    }
}

impl<'a> Outline<'a> {
    /// Returns self sampling arcs and measuring lengths as the given configuration does.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.arc_segments = config.arc_segments.max(1);
        self.pixels_per_inch = config.pixels_per_inch;
        self
    }

    /// Returns self with the given modifications on the edge starting at the given vertex.
    pub fn with_edge(
        mut self,
        index: usize,
        modifications: impl IntoIterator<Item = EdgeModification>,
    ) -> Self {
        self.edges.insert(index, modifications.into_iter().collect());
        self
    }

    /// Returns self with the given treatment on the corner at the given vertex.
    pub fn with_corner(mut self, index: usize, modification: CornerModification) -> Self {
        self.corners.insert(index, modification);
        self
    }

    /// Returns the effective offsets of every corner of the shape.
    ///
    /// When both ends of the same edge would be trimmed beyond its length, the two trims are
    /// scaled down by the same factor until they meet.
    pub fn corner_offsets(&self) -> Vec<CornerOffsets> {
        let points = &self.shape.points;
        let len = points.len();
        if len < 2 {
            return vec![CornerOffsets::default(); len];
        }

        let edge_length = |index: usize| points[index].distance(&points[(index + 1) % len]);

        let mut offsets: Vec<CornerOffsets> = (0..len)
            .map(|index| {
                self.corners
                    .get(&index)
                    .map(|corner| {
                        corner.offsets(edge_length((index + len - 1) % len), edge_length(index))
                    })
                    .unwrap_or_default()
            })
            .collect();

        for index in 0..len {
            let next = (index + 1) % len;
            let length = edge_length(index);
            let trimmed = offsets[index].along_b + offsets[next].along_a;
            if trimmed <= length || trimmed <= 0. {
                continue;
            }

            let factor = length / trimmed;
            debug!(edge = index, length, trimmed, "overlapping corner trims scaled down");

            offsets[index].along_b *= factor;
            offsets[next].along_a *= factor;
        }

        offsets
    }

    /// Returns the boundary of the shape with every modification applied, relative to the
    /// shape origin.
    ///
    /// Edge modifications are laid out along the edge left once both of its corners have been
    /// trimmed.
    pub fn resolve(&self) -> Vec<Point> {
        let points = &self.shape.points;
        let len = points.len();
        if len < 3 {
            return points.clone();
        }

        let offsets = self.corner_offsets();
        let generator = Generator::default().with_arc_segments(self.arc_segments);

        let orientation = self.shape.orientation();
        let generator = generator.with_orientation(orientation);

        let fills: Vec<Vec<Point>> = (0..len)
            .map(|index| {
                let [previous, corner, next] = [index + len - 1, index, index + 1]
                    .map(|position| &points[position % len]);

                self.corners.get(&index).copied().unwrap_or_default().fill_points(
                    previous,
                    corner,
                    next,
                    offsets[index],
                    orientation,
                    self.arc_segments,
                )
            })
            .collect();

        let mut boundary = Vec::with_capacity(len * 2);
        for (index, fill) in fills.iter().enumerate() {
            boundary.extend_from_slice(fill);

            let Some(modifications) = self.edges.get(&index) else {
                continue;
            };

            let from = fill.last().unwrap_or(&points[index]);
            let next = (index + 1) % len;
            let to = fills[next].first().unwrap_or(&points[next]);
            boundary.extend(generator.generate(from, to, modifications));
        }

        boundary
    }

    /// Returns the length, in inches, of the edge starting at the given vertex once trimmed by
    /// its corners.
    pub fn edge_display_length(&self, index: usize) -> Option<f64> {
        let edge = self.shape.edge(index)?;
        let offsets = self.corner_offsets();
        let next = (index + 1) % offsets.len();

        Some(edge_display_length(
            edge.from,
            edge.to,
            offsets[index].along_b,
            offsets[next].along_a,
            self.pixels_per_inch,
        ))
    }
}
