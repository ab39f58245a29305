//! Parametric modifications of the edges of a shape.

mod arc;
mod defaults;
mod generator;
mod placement;

pub use self::defaults::defaults_for;
pub use self::generator::{Generator, generate_edge_points};
pub use self::placement::{
    MAX_MODIFICATIONS_PER_EDGE, PlacementError, can_add_kind, can_add_modification,
    offered_kinds, validate_modifications,
};

/// Where along an edge a modification is anchored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Anchored at the first endpoint of the edge.
    Left,
    /// Anchored at the midpoint of the edge.
    #[default]
    Center,
    /// Anchored at the last endpoint of the edge.
    Right,
}

impl Placement {
    /// Returns the placement at the opposite end of the edge.
    pub fn opposite(self) -> Self {
        match self {
            Placement::Left => Placement::Right,
            Placement::Center => Placement::Center,
            Placement::Right => Placement::Left,
        }
    }
}

/// The kind of an [`EdgeModification`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModificationKind {
    #[default]
    None,
    BumpIn,
    BumpOut,
    BumpInCurve,
    BumpOutCurve,
    FullCurve,
}

impl ModificationKind {
    /// Every kind of modification.
    pub const ALL: [ModificationKind; 6] = [
        ModificationKind::None,
        ModificationKind::BumpIn,
        ModificationKind::BumpOut,
        ModificationKind::BumpInCurve,
        ModificationKind::BumpOutCurve,
        ModificationKind::FullCurve,
    ];
}

/// A rectangular or bevelled protrusion or indentation.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bump {
    pub placement: Placement,
    /// The offset of the bump from its anchor.
    pub distance: f64,
    /// How far the bump reaches away from the edge.
    pub depth: f64,
    /// The length of the edge covered by the bump.
    pub width: f64,
    /// The angle, in degrees, between the edge and the side closer to its first endpoint.
    pub side_angle_left: f64,
    /// The angle, in degrees, between the edge and the side closer to its last endpoint.
    pub side_angle_right: f64,
}

/// A protrusion or indentation shaped as a circular arc.
///
/// The depth is expected not to exceed half the width.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvedBump {
    pub placement: Placement,
    /// The offset of the bump from its anchor.
    pub distance: f64,
    /// How far the crown of the arc reaches away from the edge.
    pub depth: f64,
    /// The length of the edge covered by the bump.
    pub width: f64,
}

/// An arc bowing the whole edge outwards.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FullCurve {
    /// How far the midpoint of the edge is pushed out.
    pub depth: f64,
}

/// A parametric alteration of the straight boundary between two vertices.
///
/// The boundary points of a modification are never stored: they are derived from its
/// parameters and the endpoints of its edge by the [`Generator`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum EdgeModification {
    #[default]
    None,
    BumpIn(Bump),
    BumpOut(Bump),
    BumpInCurve(CurvedBump),
    BumpOutCurve(CurvedBump),
    FullCurve(FullCurve),
}

impl EdgeModification {
    /// Returns the modification of the given kind made of the relevant fields of the given
    /// parameters.
    pub fn new(kind: ModificationKind, params: &EdgeParameters) -> Self {
        let bump = || Bump {
            placement: params.placement,
            distance: params.distance,
            depth: params.depth,
            width: params.width,
            side_angle_left: params.side_angle_left,
            side_angle_right: params.side_angle_right,
        };

        let curved = || CurvedBump {
            placement: params.placement,
            distance: params.distance,
            depth: params.depth,
            width: params.width,
        };

        match kind {
            ModificationKind::None => EdgeModification::None,
            ModificationKind::BumpIn => EdgeModification::BumpIn(bump()),
            ModificationKind::BumpOut => EdgeModification::BumpOut(bump()),
            ModificationKind::BumpInCurve => EdgeModification::BumpInCurve(curved()),
            ModificationKind::BumpOutCurve => EdgeModification::BumpOutCurve(curved()),
            ModificationKind::FullCurve => EdgeModification::FullCurve(FullCurve {
                depth: params.full_radius_depth,
            }),
        }
    }

    pub fn kind(&self) -> ModificationKind {
        match self {
            EdgeModification::None => ModificationKind::None,
            EdgeModification::BumpIn(_) => ModificationKind::BumpIn,
            EdgeModification::BumpOut(_) => ModificationKind::BumpOut,
            EdgeModification::BumpInCurve(_) => ModificationKind::BumpInCurve,
            EdgeModification::BumpOutCurve(_) => ModificationKind::BumpOutCurve,
            EdgeModification::FullCurve(_) => ModificationKind::FullCurve,
        }
    }

    /// Returns where the modification is anchored, or [`None`] if it does not alter the edge.
    ///
    /// A full curve spans the whole edge, hence it is anchored at its center.
    pub fn placement(&self) -> Option<Placement> {
        match self {
            EdgeModification::None => None,
            EdgeModification::BumpIn(bump) | EdgeModification::BumpOut(bump) => {
                Some(bump.placement)
            }
            EdgeModification::BumpInCurve(bump) | EdgeModification::BumpOutCurve(bump) => {
                Some(bump.placement)
            }
            EdgeModification::FullCurve(_) => Some(Placement::Center),
        }
    }

    /// Returns true if, and only if, the modification leaves its edge untouched.
    pub fn is_none(&self) -> bool {
        matches!(self, EdgeModification::None)
    }

    /// Returns the range of the edge, as distances from its first endpoint, covered by the
    /// modification.
    pub fn footprint(&self, length: f64) -> Option<[f64; 2]> {
        let length = length.max(0.);
        let span = |placement: Placement, distance: f64, width: f64| {
            let width = width.max(0.);
            let start = match placement {
                Placement::Left => distance,
                Placement::Center => (length - width) / 2. + distance,
                Placement::Right => length - distance - width,
            };

            let start = start.max(0.).min(length);
            [start, (start + width).min(length)]
        };

        match self {
            EdgeModification::None => None,
            EdgeModification::BumpIn(bump) | EdgeModification::BumpOut(bump) => {
                Some(span(bump.placement, bump.distance, bump.width))
            }
            EdgeModification::BumpInCurve(bump) | EdgeModification::BumpOutCurve(bump) => {
                Some(span(bump.placement, bump.distance, bump.width))
            }
            EdgeModification::FullCurve(_) => Some([0., length]),
        }
    }
}

/// The flat record of every parameter an edge modification may have, as edited by a form.
///
/// Converting it into an [`EdgeModification`] keeps only the fields relevant to the chosen
/// kind.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EdgeParameters {
    pub placement: Placement,
    pub distance: f64,
    pub depth: f64,
    pub width: f64,
    pub side_angle_left: f64,
    pub side_angle_right: f64,
    pub full_radius_depth: f64,
}

impl From<&EdgeModification> for EdgeParameters {
    fn from(modification: &EdgeModification) -> Self {
        match modification {
            EdgeModification::None => Self::default(),
            EdgeModification::BumpIn(bump) | EdgeModification::BumpOut(bump) => Self {
                placement: bump.placement,
                distance: bump.distance,
                depth: bump.depth,
                width: bump.width,
                side_angle_left: bump.side_angle_left,
                side_angle_right: bump.side_angle_right,
                full_radius_depth: 0.,
            },
            EdgeModification::BumpInCurve(bump) | EdgeModification::BumpOutCurve(bump) => Self {
                placement: bump.placement,
                distance: bump.distance,
                depth: bump.depth,
                width: bump.width,
                ..Self::default()
            },
            EdgeModification::FullCurve(curve) => Self {
                full_radius_depth: curve.depth,
                ..Self::default()
            },
        }
    }
}
