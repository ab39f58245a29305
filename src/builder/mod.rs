mod bounds;

use tracing::{debug, trace};

use crate::{Config, Error, Point, Result, Shape};

/// The axis the drawn path is travelling along.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl Direction {
    /// Returns the perpendicular direction.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// Returns the coordinate of the given point along this axis.
    fn along(self, point: &Point) -> f64 {
        match self {
            Direction::Horizontal => point.x,
            Direction::Vertical => point.y,
        }
    }

    /// Returns the coordinate of the given point across this axis.
    fn across(self, point: &Point) -> f64 {
        self.flipped().along(point)
    }

    /// Returns the point travelling from the anchor along this axis that is the closest to the
    /// given one.
    fn project(self, anchor: &Point, point: &Point) -> Point {
        match self {
            Direction::Horizontal => Point {
                x: point.x,
                y: anchor.y,
            },
            Direction::Vertical => Point {
                x: anchor.x,
                y: point.y,
            },
        }
    }
}

/// The transient state of a drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewShape {
    /// Where the gesture started.
    pub start: Point,
    /// The end of the path, locked onto the current axis.
    pub current: Point,
    /// The vertices where the path switched between horizontal and vertical travel.
    pub changed_direction_points: Vec<Point>,
    /// The axis of the last segment of the path.
    pub direction: Direction,
}

impl PreviewShape {
    fn new(start: Point) -> Self {
        Self {
            start,
            current: start,
            changed_direction_points: Vec::new(),
            direction: Direction::Horizontal,
        }
    }

    /// Returns the direction of the first segment of the path.
    fn initial_direction(&self) -> Direction {
        if self.changed_direction_points.len() % 2 == 0 {
            self.direction
        } else {
            self.direction.flipped()
        }
    }

    /// Returns the vertex the last segment of the path starts at.
    fn anchor(&self) -> Point {
        self.changed_direction_points
            .last()
            .copied()
            .unwrap_or(self.start)
    }
}

/// Turns pointer motion into a closed orthogonal ribbon polygon.
///
/// The path drawn by the pointer is locked onto horizontal and vertical segments. Dragging
/// far enough across the current axis turns the path; coming back onto the line of the
/// previous segment undoes the turn.
#[derive(Debug, Clone, Default)]
pub struct OrthogonalPathBuilder {
    config: Config,
    preview: Option<PreviewShape>,
}

impl OrthogonalPathBuilder {
    /// Returns a builder with the given configuration, if valid.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            config: config.validate()?,
            preview: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns true if, and only if, a drag gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        self.preview.is_some()
    }

    /// Returns the state of the drag gesture in progress, if any.
    pub fn preview(&self) -> Option<&PreviewShape> {
        self.preview.as_ref()
    }

    /// Starts a drag gesture at the given canvas point.
    pub fn start(&mut self, point: Point) -> Result<()> {
        if self.preview.is_some() {
            return Err(Error::AlreadyDrawing);
        }

        debug!(x = point.x, y = point.y, "drawing started");
        self.preview = Some(PreviewShape::new(point));
        Ok(())
    }

    /// Follows the pointer to the given canvas point.
    ///
    /// Every path starts travelling horizontally, and may only turn once it has run
    /// `min_segment_length` along its current axis. Hence a drag heading straight down from its
    /// start stays a zero-length horizontal stub until the pointer moves sideways far enough.
    pub fn move_to(&mut self, point: Point) {
        let Some(preview) = self.preview.as_mut() else {
            return;
        };

        let config = &self.config;
        let direction = preview.direction;
        let anchor = preview.anchor();
        let run = (direction.along(&point) - direction.along(&anchor)).abs();

        if !preview.changed_direction_points.is_empty() && run < config.revert_tolerance {
            preview.changed_direction_points.pop();
            preview.direction = direction.flipped();
            preview.current = preview.direction.project(&preview.anchor(), &point);

            debug!(
                corners = preview.changed_direction_points.len(),
                direction = ?preview.direction,
                "direction change reverted"
            );
            return;
        }

        let can_change_direction = run >= config.min_segment_length;
        let is_changing = (direction.across(&point) - direction.across(&anchor)).abs()
            > config.half_width;

        if can_change_direction && is_changing {
            let corner = direction.project(&anchor, &point);
            preview.changed_direction_points.push(corner);
            preview.direction = direction.flipped();
            preview.current = preview.direction.project(&corner, &point);

            debug!(
                x = corner.x,
                y = corner.y,
                direction = ?preview.direction,
                "direction changed"
            );
            return;
        }

        preview.current = direction.project(&anchor, &point);
        trace!(x = preview.current.x, y = preview.current.y, "path extended");
    }

    /// Returns the closed polygon of the drag gesture in progress, in canvas coordinates.
    ///
    /// The polygon is made of the start cap, the outer rail, the end cap and the inner rail
    /// in reverse order, hence it always has `4 + 2n` vertices, being `n` the amount of
    /// direction changes.
    pub fn preview_bounds(&self) -> Option<Vec<Point>> {
        self.preview.as_ref().map(|preview| {
            bounds::ribbon(
                preview.start,
                &preview.changed_direction_points,
                preview.current,
                preview.initial_direction(),
                self.config.half_width,
            )
        })
    }

    /// Ends the drag gesture in progress, returning the resulting shape.
    ///
    /// The points of the shape are relative to its origin, which is placed at the minimum
    /// coordinates of the polygon.
    pub fn end(&mut self) -> Option<Shape> {
        let points = self.preview_bounds()?;
        self.preview = None;

        let shape = Shape::from_absolute(points);
        debug!(
            x_pos = shape.x_pos,
            y_pos = shape.y_pos,
            vertices = shape.points.len(),
            "drawing finished"
        );

        Some(shape)
    }

    /// Discards the drag gesture in progress, if any.
    pub fn cancel(&mut self) {
        if self.preview.take().is_some() {
            debug!("drawing cancelled");
        }
    }
}
