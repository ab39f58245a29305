use crate::corner::{CornerModification, CornerOffsets};

/// The treatments of the four corners of an axis-aligned rectangle.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectangleCorners {
    pub top_left: CornerModification,
    pub top_right: CornerModification,
    pub bottom_right: CornerModification,
    pub bottom_left: CornerModification,
}

/// The offsets of the four corners of an axis-aligned rectangle.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RectangleOffsets {
    pub top_left: CornerOffsets,
    pub top_right: CornerOffsets,
    pub bottom_right: CornerOffsets,
    pub bottom_left: CornerOffsets,
}

impl RectangleCorners {
    /// Returns the same treatment for every corner.
    pub fn uniform(modification: CornerModification) -> Self {
        Self {
            top_left: modification,
            top_right: modification,
            bottom_right: modification,
            bottom_left: modification,
        }
    }

    /// Returns the offsets of each corner of a rectangle of the given dimensions.
    ///
    /// Corners are walked top-left, top-right, bottom-right, bottom-left, so the edge entering
    /// the top-left corner is the left side of the rectangle.
    pub fn offsets(&self, width: f64, height: f64) -> RectangleOffsets {
        RectangleOffsets {
            top_left: self.top_left.offsets(height, width),
            top_right: self.top_right.offsets(width, height),
            bottom_right: self.bottom_right.offsets(height, width),
            bottom_left: self.bottom_left.offsets(width, height),
        }
    }
}
