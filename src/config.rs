use crate::{Error, Result};

/// Half of the ribbon height, in canvas units, used when none is configured.
pub const DEFAULT_HALF_WIDTH: f64 = 12.5;

/// Canvas units per inch.
pub const PIXELS_PER_INCH: f64 = 1.0;

/// Tunable parameters of the geometry engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// The distance between the drawn path and each rail of the ribbon.
    pub half_width: f64,
    /// The shortest run along the current axis after which the path may turn.
    pub min_segment_length: f64,
    /// How close to the previous segment the pointer must come back to undo a turn.
    pub revert_tolerance: f64,
    /// The amount of straight pieces each sampled arc is made of.
    pub arc_segments: usize,
    /// Canvas units per inch, for length display.
    pub pixels_per_inch: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            half_width: DEFAULT_HALF_WIDTH,
            min_segment_length: 2. * DEFAULT_HALF_WIDTH,
            revert_tolerance: DEFAULT_HALF_WIDTH,
            arc_segments: 16,
            pixels_per_inch: PIXELS_PER_INCH,
        }
    }
}

impl Config {
    /// Returns self with the given ribbon half-width.
    pub fn with_half_width(mut self, half_width: f64) -> Self {
        self.half_width = half_width;
        self
    }

    /// Returns self with the given minimum segment length.
    pub fn with_min_segment_length(mut self, length: f64) -> Self {
        self.min_segment_length = length;
        self
    }

    /// Returns self with the given revert tolerance.
    pub fn with_revert_tolerance(mut self, tolerance: f64) -> Self {
        self.revert_tolerance = tolerance;
        self
    }

    /// Returns self with the given amount of pieces per arc.
    pub fn with_arc_segments(mut self, segments: usize) -> Self {
        self.arc_segments = segments;
        self
    }

    /// Returns self with the given amount of canvas units per inch.
    pub fn with_pixels_per_inch(mut self, pixels_per_inch: f64) -> Self {
        self.pixels_per_inch = pixels_per_inch;
        self
    }

    /// Returns self if, and only if, every parameter is usable.
    ///
    /// A revert tolerance at or beyond the minimum segment length would let a single pointer
    /// position both turn the path and undo the turn. One beyond the half-width would undo a
    /// turn on the very next move to the position that made it.
    pub fn validate(self) -> Result<Self> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0. {
                Ok(())
            } else {
                Err(Error::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )))
            }
        };

        positive("half_width", self.half_width)?;
        positive("min_segment_length", self.min_segment_length)?;
        positive("revert_tolerance", self.revert_tolerance)?;
        positive("pixels_per_inch", self.pixels_per_inch)?;

        if self.revert_tolerance >= self.min_segment_length {
            return Err(Error::InvalidConfig(format!(
                "revert_tolerance ({}) must be smaller than min_segment_length ({})",
                self.revert_tolerance, self.min_segment_length
            )));
        }

        if self.revert_tolerance > self.half_width {
            return Err(Error::InvalidConfig(format!(
                "revert_tolerance ({}) must not exceed half_width ({})",
                self.revert_tolerance, self.half_width
            )));
        }

        if self.arc_segments == 0 {
            return Err(Error::InvalidConfig(
                "arc_segments must be at least 1".to_string(),
            ));
        }

        Ok(self)
    }
}
