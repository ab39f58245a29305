use tracing::warn;

/// The indices of the points bounding the two cap edges of a drawn ribbon.
///
/// A ribbon drawn by the [`OrthogonalPathBuilder`](crate::OrthogonalPathBuilder) with `n`
/// direction changes has `4 + 2n` points: the two points of its start cap, the `n` outer
/// corners, the two points of its end cap and the `n` inner corners.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapEdges {
    /// The endpoints of the edge closing the ribbon where the drag started.
    pub start: [usize; 2],
    /// The endpoints of the edge closing the ribbon where the drag ended.
    pub end: [usize; 2],
    /// Whether the indices follow from the layout of a drawn ribbon, or are a guess about a
    /// polygon with some other layout.
    pub exact: bool,
}

/// Returns the cap edges of a ribbon made of the given amount of points.
///
/// Polygons whose amount of points cannot come from a drawn ribbon get their end cap at the
/// middle of the boundary. Returns [`None`] if there are not enough points to make any edge.
pub fn resolve_start_end_edges(len: usize) -> Option<CapEdges> {
    if len < 2 {
        return None;
    }

    if len >= 4 && len % 2 == 0 {
        let corners = (len - 4) / 2;
        return Some(CapEdges {
            start: [0, 1],
            end: [corners + 2, corners + 3],
            exact: true,
        });
    }

    let middle = len / 2;
    warn!(len, "cap edges guessed from a polygon that is not a drawn ribbon");

    Some(CapEdges {
        start: [0, 1],
        end: [middle, (middle + 1) % len],
        exact: false,
    })
}
