use crate::modification::{EdgeModification, EdgeParameters, ModificationKind, Placement};

/// Returns the parameters a new modification of the given kind starts with, when added to an
/// edge already holding the given modifications.
///
/// The first modification of an edge is centered on it. Any other goes to whichever end of the
/// edge is free.
pub fn defaults_for(kind: ModificationKind, existing: &[EdgeModification]) -> EdgeParameters {
    let params = match kind {
        ModificationKind::None => EdgeParameters::default(),
        ModificationKind::BumpIn | ModificationKind::BumpOut => EdgeParameters {
            depth: 3.,
            width: 30.,
            side_angle_left: 90.,
            side_angle_right: 90.,
            ..Default::default()
        },
        ModificationKind::BumpInCurve | ModificationKind::BumpOutCurve => EdgeParameters {
            depth: 3.,
            width: 30.,
            ..Default::default()
        },
        ModificationKind::FullCurve => EdgeParameters {
            full_radius_depth: 4.,
            ..Default::default()
        },
    };

    EdgeParameters {
        placement: default_placement(existing),
        ..params
    }
}

fn default_placement(existing: &[EdgeModification]) -> Placement {
    let mut occupied = existing.iter().filter_map(EdgeModification::placement);
    match occupied.next() {
        None => Placement::Center,
        Some(Placement::Left) => Placement::Right,
        Some(Placement::Right) | Some(Placement::Center) => Placement::Left,
    }
}
