use tracing::trace;

use crate::{
    Config, Frame, Orientation, Point, Segment,
    modification::{Bump, CurvedBump, EdgeModification, FullCurve, arc::Arc},
};

/// The side angle producing a square cut.
const RIGHT_ANGLE: f64 = 90.;

/// The side angles are kept this many degrees away from lying flat on the edge.
const MIN_SIDE_ANGLE: f64 = 1.;

/// Returns the points to splice between `p1` and `p2` to apply the given modifications to the
/// edge of a ribbon drawn by the [`OrthogonalPathBuilder`](crate::OrthogonalPathBuilder).
///
/// See [`Generator::generate`].
pub fn generate_edge_points(
    p1: &Point,
    p2: &Point,
    modifications: &[EdgeModification],
) -> Vec<Point> {
    Generator::default().generate(p1, p2, modifications)
}

/// Resolves edge modifications into boundary points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Generator {
    orientation: Orientation,
    arc_segments: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            arc_segments: Config::default().arc_segments,
        }
    }
}

impl From<&Config> for Generator {
    fn from(config: &Config) -> Self {
        Self::default().with_arc_segments(config.arc_segments)
    }
}

impl Generator {
    /// Returns self generating points for a boundary with the given orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Returns self sampling arcs into the given amount of straight pieces.
    pub fn with_arc_segments(mut self, segments: usize) -> Self {
        self.arc_segments = segments.max(1);
        self
    }

    /// Returns the points replacing the straight run between `p1` and `p2`, in order from `p1`
    /// to `p2`, excluding both endpoints.
    ///
    /// An empty list means the edge stays straight. Modifications are laid out in the order of
    /// their position along the edge; they are expected not to overlap.
    pub fn generate(
        &self,
        p1: &Point,
        p2: &Point,
        modifications: &[EdgeModification],
    ) -> Vec<Point> {
        let frame = Segment::from((p1, p2)).frame(self.orientation);

        let mut ordered: Vec<(f64, &EdgeModification)> = modifications
            .iter()
            .filter_map(|modification| {
                modification
                    .footprint(frame.length)
                    .map(|[start, _]| (start, modification))
            })
            .collect();

        ordered.sort_by(|(a, _), (b, _)| a.total_cmp(b));

        ordered
            .into_iter()
            .flat_map(|(_, modification)| self.modification_points(&frame, modification))
            .collect()
    }

    /// Returns the points of a single modification between `p1` and `p2`.
    pub fn generate_one(
        &self,
        p1: &Point,
        p2: &Point,
        modification: &EdgeModification,
    ) -> Vec<Point> {
        let frame = Segment::from((p1, p2)).frame(self.orientation);
        self.modification_points(&frame, modification)
    }

    /// Recomputes the points of each of the given modifications of the edge between `p1` and
    /// `p2`, keeping the key of each one.
    pub fn regenerate<K>(
        &self,
        p1: &Point,
        p2: &Point,
        modifications: impl IntoIterator<Item = (K, EdgeModification)>,
    ) -> Vec<(K, Vec<Point>)> {
        let frame = Segment::from((p1, p2)).frame(self.orientation);
        modifications
            .into_iter()
            .map(|(key, modification)| (key, self.modification_points(&frame, &modification)))
            .collect()
    }

    fn modification_points(&self, frame: &Frame, modification: &EdgeModification) -> Vec<Point> {
        let Some([start, end]) = modification.footprint(frame.length) else {
            return Vec::new();
        };

        let local = match modification {
            EdgeModification::None => Vec::new(),
            EdgeModification::BumpOut(bump) => bump_points(bump, start, end, 1.),
            EdgeModification::BumpIn(bump) => bump_points(bump, start, end, -1.),
            EdgeModification::BumpOutCurve(bump) => self.curved_points(bump, start, end, 1.),
            EdgeModification::BumpInCurve(bump) => self.curved_points(bump, start, end, -1.),
            EdgeModification::FullCurve(curve) => self.full_curve_points(curve, frame.length),
        };

        trace!(
            kind = ?modification.kind(),
            start,
            end,
            points = local.len(),
            "edge modification resolved"
        );

        // Base points on the endpoints of the edge would repeat its vertices.
        local
            .into_iter()
            .filter(|(along, out)| *out != 0. || (*along > 0. && *along < frame.length))
            .map(|(along, out)| frame.point(along, out))
            .collect()
    }

    fn curved_points(
        &self,
        bump: &CurvedBump,
        start: f64,
        end: f64,
        sign: f64,
    ) -> Vec<(f64, f64)> {
        Arc {
            from: start,
            to: end,
            sagitta: sign * bump.depth.abs(),
        }
        .sample(self.arc_segments)
    }

    fn full_curve_points(&self, curve: &FullCurve, length: f64) -> Vec<(f64, f64)> {
        let points = Arc {
            from: 0.,
            to: length,
            sagitta: curve.depth,
        }
        .sample(self.arc_segments);

        // The endpoints of the edge are not part of the replacement.
        let interior = points.len().saturating_sub(1);
        points.into_iter().take(interior).skip(1).collect()
    }
}

/// Returns how far along the edge the top of a side with the given angle is from its base.
fn bevel(depth: f64, angle: f64) -> f64 {
    if angle == RIGHT_ANGLE || !angle.is_finite() {
        return 0.;
    }

    let angle = angle.clamp(MIN_SIDE_ANGLE, 180. - MIN_SIDE_ANGLE).to_radians();
    depth * angle.cos() / angle.sin()
}

fn bump_points(bump: &Bump, start: f64, end: f64, sign: f64) -> Vec<(f64, f64)> {
    let depth = bump.depth.abs();
    let out = sign * depth;

    let top_start = start + bevel(depth, bump.side_angle_left);
    let top_end = end - bevel(depth, bump.side_angle_right);

    if top_start >= top_end {
        // The sides cross before reaching the full depth, so the top collapses into an apex.
        let apex = (top_start + top_end) / 2.;
        return vec![(start, 0.), (apex, out), (end, 0.)];
    }

    vec![(start, 0.), (top_start, out), (top_end, out), (end, 0.)]
}
