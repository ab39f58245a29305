use crate::{
    Error, Point, Result, Segment,
    modification::{EdgeModification, ModificationKind, Placement},
};

/// The maximum amount of modifications a single edge may hold.
pub const MAX_MODIFICATIONS_PER_EDGE: usize = 2;

/// The reason a modification cannot be added to an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The edge holds a centered modification, which cannot share the edge.
    #[error("the edge already holds a centered modification")]
    CenterOccupied,

    /// A centered modification must be the only one of its edge.
    #[error("a centered modification cannot share the edge with other modifications")]
    CenterNotAlone,

    /// The end of the edge is already taken.
    #[error("the {0:?} end of the edge already holds a modification")]
    SideOccupied(Placement),

    /// The edge holds as many modifications as allowed.
    #[error("an edge cannot hold more than {} modifications", MAX_MODIFICATIONS_PER_EDGE)]
    LimitReached,

    /// A full curve must be the only modification of its edge.
    #[error("a full curve cannot share the edge with other modifications")]
    FullCurveNotAlone,
}

/// Returns whether a modification anchored at the given placement may be added to an edge
/// already holding the given modifications.
///
/// Modifications of kind [`EdgeModification::None`] take no room on the edge.
pub fn can_add_modification(
    existing: &[EdgeModification],
    proposed: Placement,
) -> std::result::Result<(), PlacementError> {
    let occupied: Vec<Placement> = existing
        .iter()
        .filter_map(EdgeModification::placement)
        .collect();

    if occupied.contains(&Placement::Center) {
        return Err(PlacementError::CenterOccupied);
    }

    if proposed == Placement::Center && !occupied.is_empty() {
        return Err(PlacementError::CenterNotAlone);
    }

    if occupied.contains(&proposed) {
        return Err(PlacementError::SideOccupied(proposed));
    }

    if occupied.len() >= MAX_MODIFICATIONS_PER_EDGE {
        return Err(PlacementError::LimitReached);
    }

    Ok(())
}

/// Same as [`can_add_modification`], but also rejecting a full curve on an edge that is not
/// empty.
pub fn can_add_kind(
    existing: &[EdgeModification],
    kind: ModificationKind,
    proposed: Placement,
) -> std::result::Result<(), PlacementError> {
    match kind {
        ModificationKind::None => Ok(()),
        ModificationKind::FullCurve => {
            if existing.iter().any(|modification| !modification.is_none()) {
                return Err(PlacementError::FullCurveNotAlone);
            }

            Ok(())
        }
        _ => can_add_modification(existing, proposed),
    }
}

/// Returns the kinds of modification that can still be added to an edge holding the given
/// modifications, each at some placement.
pub fn offered_kinds(existing: &[EdgeModification]) -> Vec<ModificationKind> {
    let placements = [Placement::Left, Placement::Center, Placement::Right];

    ModificationKind::ALL
        .into_iter()
        .filter(|kind| *kind != ModificationKind::None)
        .filter(|kind| {
            placements
                .iter()
                .any(|placement| can_add_kind(existing, *kind, *placement).is_ok())
        })
        .collect()
}

/// Returns an error if the given modifications cannot be applied together to the edge between
/// `p1` and `p2`.
///
/// On top of the placement rules, every modification must fit in the edge without overlapping
/// the others, and curved bumps cannot be deeper than half their width.
pub fn validate_modifications(
    p1: &Point,
    p2: &Point,
    modifications: &[EdgeModification],
) -> Result<()> {
    let length = Segment::from((p1, p2)).length();

    modifications
        .iter()
        .enumerate()
        .try_for_each(|(index, modification)| {
            let placement = match modification.placement() {
                Some(placement) => placement,
                None => return Ok(()),
            };

            can_add_kind(&modifications[..index], modification.kind(), placement)?;
            fits(modification, length)
        })?;

    let mut spans: Vec<[f64; 2]> = modifications
        .iter()
        .filter_map(|modification| modification.footprint(length))
        .collect();

    spans.sort_by(|a, b| a[0].total_cmp(&b[0]));
    if spans.windows(2).any(|pair| pair[0][1] > pair[1][0]) {
        return Err(Error::InvalidModification(
            "modifications overlap along the edge".to_string(),
        ));
    }

    Ok(())
}

fn fits(modification: &EdgeModification, length: f64) -> Result<()> {
    let invalid = |reason: String| Err(Error::InvalidModification(reason));

    match modification {
        EdgeModification::None => Ok(()),
        EdgeModification::BumpIn(bump) | EdgeModification::BumpOut(bump) => {
            span_fits(bump.placement, bump.distance, bump.width, length)?;
            if !(bump.depth >= 0.) {
                return invalid(format!("depth {} must not be negative", bump.depth));
            }

            let angles = [bump.side_angle_left, bump.side_angle_right];
            if angles.iter().any(|angle| !(*angle > 0. && *angle < 180.)) {
                return invalid(format!(
                    "side angles {angles:?} must be between 0 and 180 degrees"
                ));
            }

            Ok(())
        }
        EdgeModification::BumpInCurve(bump) | EdgeModification::BumpOutCurve(bump) => {
            span_fits(bump.placement, bump.distance, bump.width, length)?;
            if !(bump.depth >= 0. && bump.depth <= bump.width / 2.) {
                return invalid(format!(
                    "depth {} of a curved bump must be between 0 and half its width ({})",
                    bump.depth,
                    bump.width / 2.
                ));
            }

            Ok(())
        }
        EdgeModification::FullCurve(curve) => {
            if !curve.depth.is_finite() {
                return invalid(format!("full curve depth {} must be finite", curve.depth));
            }

            Ok(())
        }
    }
}

fn span_fits(placement: Placement, distance: f64, width: f64, length: f64) -> Result<()> {
    let start = match placement {
        Placement::Left => distance,
        Placement::Center => (length - width) / 2. + distance,
        Placement::Right => length - distance - width,
    };

    if !(width > 0.) || !(start >= 0.) || !(start + width <= length) {
        return Err(Error::InvalidModification(format!(
            "a modification {width} wide at {distance} from the {placement:?} anchor does not \
             fit in an edge {length} long"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        modification::{
            Bump, CurvedBump, EdgeModification, FullCurve, ModificationKind, Placement,
            PlacementError, can_add_kind, can_add_modification, offered_kinds,
            validate_modifications,
        },
    };

    fn bump(placement: Placement) -> EdgeModification {
        EdgeModification::BumpOut(Bump {
            placement,
            depth: 3.,
            width: 20.,
            side_angle_left: 90.,
            side_angle_right: 90.,
            ..Default::default()
        })
    }

    #[test]
    fn adding_modifications() {
        struct Test {
            name: &'static str,
            existing: Vec<EdgeModification>,
            proposed: Placement,
            want: Result<(), PlacementError>,
        }

        vec![
            Test {
                name: "center on an empty edge",
                existing: vec![],
                proposed: Placement::Center,
                want: Ok(()),
            },
            Test {
                name: "left on an empty edge",
                existing: vec![],
                proposed: Placement::Left,
                want: Ok(()),
            },
            Test {
                name: "anything next to a centered modification",
                existing: vec![bump(Placement::Center)],
                proposed: Placement::Left,
                want: Err(PlacementError::CenterOccupied),
            },
            Test {
                name: "center next to another modification",
                existing: vec![bump(Placement::Right)],
                proposed: Placement::Center,
                want: Err(PlacementError::CenterNotAlone),
            },
            Test {
                name: "left next to a left modification",
                existing: vec![bump(Placement::Left)],
                proposed: Placement::Left,
                want: Err(PlacementError::SideOccupied(Placement::Left)),
            },
            Test {
                name: "right next to a left modification",
                existing: vec![bump(Placement::Left)],
                proposed: Placement::Right,
                want: Ok(()),
            },
            Test {
                name: "third modification on the left",
                existing: vec![bump(Placement::Left), bump(Placement::Right)],
                proposed: Placement::Left,
                want: Err(PlacementError::SideOccupied(Placement::Left)),
            },
            Test {
                name: "third modification at the center",
                existing: vec![bump(Placement::Left), bump(Placement::Right)],
                proposed: Placement::Center,
                want: Err(PlacementError::CenterNotAlone),
            },
            Test {
                name: "next to a full curve",
                existing: vec![EdgeModification::FullCurve(FullCurve { depth: 4. })],
                proposed: Placement::Right,
                want: Err(PlacementError::CenterOccupied),
            },
            Test {
                name: "next to no actual modification",
                existing: vec![EdgeModification::None],
                proposed: Placement::Center,
                want: Ok(()),
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = can_add_modification(&test.existing, test.proposed);
            assert_eq!(got, test.want, "{}", test.name);
        });
    }

    #[test]
    fn limit_is_enforced_regardless_of_placement() {
        // Two modifications at the same end can only come from outside the validator.
        let existing = [bump(Placement::Left), bump(Placement::Left)];
        assert_eq!(
            can_add_modification(&existing, Placement::Right),
            Err(PlacementError::LimitReached)
        );
    }

    #[test]
    fn full_curve_must_be_alone() {
        assert_eq!(
            can_add_kind(&[], ModificationKind::FullCurve, Placement::Center),
            Ok(())
        );
        assert_eq!(
            can_add_kind(
                &[bump(Placement::Left)],
                ModificationKind::FullCurve,
                Placement::Center
            ),
            Err(PlacementError::FullCurveNotAlone)
        );
    }

    #[test]
    fn offered_modification_kinds() {
        let all = vec![
            ModificationKind::BumpIn,
            ModificationKind::BumpOut,
            ModificationKind::BumpInCurve,
            ModificationKind::BumpOutCurve,
            ModificationKind::FullCurve,
        ];

        assert_eq!(offered_kinds(&[]), all);
        assert_eq!(offered_kinds(&[bump(Placement::Left)]), all[..4].to_vec());
        assert!(offered_kinds(&[bump(Placement::Left), bump(Placement::Right)]).is_empty());
        assert!(offered_kinds(&[bump(Placement::Center)]).is_empty());
    }

    #[test]
    fn modification_validation() {
        struct Test {
            name: &'static str,
            modifications: Vec<EdgeModification>,
            want: bool,
        }

        let curved = |depth: f64| {
            EdgeModification::BumpOutCurve(CurvedBump {
                placement: Placement::Center,
                distance: 0.,
                depth,
                width: 30.,
            })
        };

        vec![
            Test {
                name: "no modifications",
                modifications: vec![],
                want: true,
            },
            Test {
                name: "bumps at both ends",
                modifications: vec![bump(Placement::Left), bump(Placement::Right)],
                want: true,
            },
            Test {
                name: "curved bump as deep as half its width",
                modifications: vec![curved(15.)],
                want: true,
            },
            Test {
                name: "curved bump deeper than half its width",
                modifications: vec![curved(16.)],
                want: false,
            },
            Test {
                name: "bump wider than the edge",
                modifications: vec![EdgeModification::BumpIn(Bump {
                    width: 120.,
                    ..Default::default()
                })],
                want: false,
            },
            Test {
                name: "overlapping bumps",
                modifications: vec![
                    EdgeModification::BumpIn(Bump {
                        placement: Placement::Left,
                        width: 60.,
                        side_angle_left: 90.,
                        side_angle_right: 90.,
                        ..Default::default()
                    }),
                    EdgeModification::BumpOut(Bump {
                        placement: Placement::Right,
                        width: 60.,
                        side_angle_left: 90.,
                        side_angle_right: 90.,
                        ..Default::default()
                    }),
                ],
                want: false,
            },
            Test {
                name: "flat side angle",
                modifications: vec![EdgeModification::BumpOut(Bump {
                    placement: Placement::Left,
                    depth: 3.,
                    width: 20.,
                    side_angle_left: 0.,
                    side_angle_right: 90.,
                    ..Default::default()
                })],
                want: false,
            },
            Test {
                name: "conflicting placements",
                modifications: vec![bump(Placement::Center), bump(Placement::Left)],
                want: false,
            },
            Test {
                name: "full curve with a bump",
                modifications: vec![
                    bump(Placement::Left),
                    EdgeModification::FullCurve(FullCurve { depth: 4. }),
                ],
                want: false,
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = validate_modifications(
                &point!(0., 0.),
                &point!(96., 0.),
                &test.modifications,
            );

            assert_eq!(got.is_ok(), test.want, "{}: got {got:?}", test.name);
            if let Err(err) = got {
                assert!(
                    matches!(err, Error::Placement(_) | Error::InvalidModification(_)),
                    "{}",
                    test.name
                );
            }
        });
    }
}
