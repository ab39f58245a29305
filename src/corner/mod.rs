//! Treatments of the corners of a shape.
//!
//! A corner is the vertex between the edge entering it, `A`, and the edge leaving it, `B`. A
//! treatment trims both edges by some amount (its [`CornerOffsets`]) and fills the gap between
//! the trimmed ends with its own geometry.

mod rectangle;

use std::f64::consts::FRAC_PI_2;

use tracing::debug;

use crate::{Distance, Orientation, Point, Segment};

pub use self::rectangle::{RectangleCorners, RectangleOffsets};

/// The kind of a [`CornerModification`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CornerKind {
    #[default]
    None,
    Radius,
    Clip,
    BumpOut,
    Notch,
}

/// A parametric treatment of the corner of a shape.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum CornerModification {
    /// A sharp corner.
    #[default]
    None,
    /// A rounded corner.
    Radius { radius: f64 },
    /// A corner cut by a straight bevel.
    Clip { clip: f64 },
    /// A rectangular ear growing the corner outwards.
    BumpOut { length: f64, depth: f64 },
    /// A rectangular cut into the corner.
    Notch { length: f64, depth: f64 },
}

/// How much each edge adjoining a corner is shortened by its treatment.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CornerOffsets {
    /// The trim of the edge entering the corner.
    pub along_a: f64,
    /// The trim of the edge leaving the corner.
    pub along_b: f64,
}

/// The flat record of every parameter a corner may have, as edited by a form.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CornerParameters {
    pub kind: CornerKind,
    pub radius: Option<f64>,
    pub clip: Option<f64>,
    pub modification_length: Option<f64>,
    pub modification_depth: Option<f64>,
}

impl From<&CornerParameters> for CornerModification {
    /// Keeps the parameters relevant to the kind of the record; the missing ones are zero.
    fn from(params: &CornerParameters) -> Self {
        let length = params.modification_length.unwrap_or_default();
        let depth = params.modification_depth.unwrap_or_default();

        match params.kind {
            CornerKind::None => CornerModification::None,
            CornerKind::Radius => CornerModification::Radius {
                radius: params.radius.unwrap_or_default(),
            },
            CornerKind::Clip => CornerModification::Clip {
                clip: params.clip.unwrap_or_default(),
            },
            CornerKind::BumpOut => CornerModification::BumpOut { length, depth },
            CornerKind::Notch => CornerModification::Notch { length, depth },
        }
    }
}

impl From<&CornerModification> for CornerParameters {
    fn from(modification: &CornerModification) -> Self {
        let kind = modification.kind();
        match *modification {
            CornerModification::None => Self::default(),
            CornerModification::Radius { radius } => Self {
                kind,
                radius: Some(radius),
                ..Default::default()
            },
            CornerModification::Clip { clip } => Self {
                kind,
                clip: Some(clip),
                ..Default::default()
            },
            CornerModification::BumpOut { length, depth }
            | CornerModification::Notch { length, depth } => Self {
                kind,
                modification_length: Some(length),
                modification_depth: Some(depth),
                ..Default::default()
            },
        }
    }
}

impl CornerModification {
    /// Returns the treatment described by a record holding an optional radius and clip.
    ///
    /// A radius takes precedence over a clip when both are present.
    pub fn from_legacy(radius: Option<f64>, clip: Option<f64>) -> Self {
        match (radius, clip) {
            (Some(radius), _) if radius > 0. => CornerModification::Radius { radius },
            (_, Some(clip)) if clip > 0. => CornerModification::Clip { clip },
            _ => CornerModification::None,
        }
    }

    pub fn kind(&self) -> CornerKind {
        match self {
            CornerModification::None => CornerKind::None,
            CornerModification::Radius { .. } => CornerKind::Radius,
            CornerModification::Clip { .. } => CornerKind::Clip,
            CornerModification::BumpOut { .. } => CornerKind::BumpOut,
            CornerModification::Notch { .. } => CornerKind::Notch,
        }
    }

    /// Returns how much the edges entering and leaving the corner are trimmed, being `len_a` and
    /// `len_b` their respective lengths.
    ///
    /// No trim exceeds the length of its edge. Radii and clips stay symmetric, hence they are
    /// bounded by the shorter edge.
    pub fn offsets(&self, len_a: f64, len_b: f64) -> CornerOffsets {
        let (len_a, len_b) = (len_a.max(0.), len_b.max(0.));
        let bounded = |value: f64, max: f64| {
            let bounded = value.max(0.).min(max);
            if bounded != value {
                debug!(value, bounded, "corner offset clamped");
            }

            bounded
        };

        match *self {
            CornerModification::None => CornerOffsets::default(),
            CornerModification::Radius { radius: size }
            | CornerModification::Clip { clip: size } => {
                let size = bounded(size, len_a.min(len_b));
                CornerOffsets {
                    along_a: size,
                    along_b: size,
                }
            }
            CornerModification::Notch { length, depth } => CornerOffsets {
                along_a: bounded(length, len_a),
                along_b: bounded(depth, len_b),
            },
            CornerModification::BumpOut { length, .. } => CornerOffsets {
                along_a: bounded(length, len_a),
                along_b: bounded(length, len_b),
            },
        }
    }

    /// Returns the points replacing the corner vertex when its adjoining edges are trimmed by
    /// the given offsets, from the trimmed end of the entering edge to the trimmed start of the
    /// leaving one, both included.
    ///
    /// The orientation of the boundary tells its outer side apart, so a bump out always adds
    /// material and a notch always removes it, whether the corner is convex or concave.
    pub fn fill_points(
        &self,
        previous: &Point,
        corner: &Point,
        next: &Point,
        offsets: CornerOffsets,
        orientation: Orientation,
        arc_segments: usize,
    ) -> Vec<Point> {
        let entering = (*corner - *previous).normalized();
        let leaving = (*next - *corner).normalized();

        let a = *corner - entering * offsets.along_a;
        let b = *corner + leaving * offsets.along_b;

        let outward_a = Segment::from((previous, corner)).frame(orientation).normal;
        let outward_b = Segment::from((corner, next)).frame(orientation).normal;

        // The leaving edge heads out of the boundary at concave corners.
        let is_concave = leaving.x * outward_a.x + leaving.y * outward_a.y > 0.;

        match *self {
            CornerModification::None => vec![*corner],
            CornerModification::Radius { .. } => {
                if a.distance(corner) == 0. || b.distance(corner) == 0. {
                    return vec![*corner];
                }

                // The quarter arc tangent to both edges, centered opposite to the corner.
                let center = a + b - *corner;
                let (start, end) = (*corner - b, *corner - a);
                let segments = arc_segments.max(1);

                (0..=segments)
                    .map(|index| match index {
                        0 => a,
                        index if index == segments => b,
                        index => {
                            let angle = FRAC_PI_2 * index as f64 / segments as f64;
                            center + start * angle.cos() + end * angle.sin()
                        }
                    })
                    .collect()
            }
            CornerModification::Clip { .. } => vec![a, b],
            CornerModification::Notch { .. } => {
                let inner = a - outward_a * offsets.along_b;
                if is_concave {
                    vec![a, inner, *corner - outward_a * offsets.along_b, b]
                } else {
                    vec![a, inner, b]
                }
            }
            CornerModification::BumpOut { depth, .. } => {
                let depth = depth.max(0.);
                vec![
                    a,
                    a + outward_a * depth,
                    *corner + outward_a * depth + outward_b * depth,
                    *corner + outward_b * depth + leaving * offsets.along_b,
                    b,
                ]
            }
        }
    }
}
