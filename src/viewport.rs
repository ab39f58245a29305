use crate::Point;

/// The pan and zoom of the canvas, mapping screen coordinates to canvas coordinates and back.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// The screen position of the canvas origin.
    pub pan: Point,
    /// The zoom level as a percentage, where 100 is a 1:1 mapping.
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: Point::default(),
            zoom: 100.,
        }
    }
}

impl Viewport {
    pub fn new(pan: impl Into<Point>, zoom: f64) -> Self {
        Self {
            pan: pan.into(),
            zoom,
        }
    }

    /// Returns the scale factor corresponding to the zoom percentage.
    ///
    /// A non-positive or non-finite zoom is treated as 100%.
    pub fn scale(&self) -> f64 {
        if self.zoom.is_finite() && self.zoom > 0. {
            self.zoom / 100.
        } else {
            1.
        }
    }

    /// Returns the canvas position under the given screen position.
    pub fn to_canvas(&self, screen: Point) -> Point {
        (screen - self.pan) * self.scale().recip()
    }

    /// Returns the screen position of the given canvas position.
    pub fn to_screen(&self, canvas: Point) -> Point {
        canvas * self.scale() + self.pan
    }

    /// Returns self with the given zoom, panned so the canvas position under `screen` stays put.
    pub fn zoom_at(self, screen: Point, zoom: f64) -> Self {
        let anchor = self.to_canvas(screen);
        let zoomed = Self { zoom, ..self };

        Self {
            pan: screen - anchor * zoomed.scale(),
            zoom,
        }
    }
}
