use std::ops::{Add, Mul, Neg, Sub};

use num_traits::Float;

use crate::{Distance, IsClose, Tolerance};

/// A point in the canvas plane.
///
/// The canvas is y-down: positive `y` grows towards the bottom of the screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T = f64> {
    /// The horizontal coordinate of the point.
    pub x: T,
    /// The vertical coordinate of the point.
    pub y: T,
}

impl<T> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> Add for Point<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T> Sub for Point<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T> Mul<T> for Point<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> Neg for Point<T>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T> Distance for Point<T>
where
    T: Float,
{
    type Distance = T;

    fn distance(&self, rhs: &Self) -> Self::Distance {
        (self.x - rhs.x).hypot(self.y - rhs.y)
    }
}

impl<T> IsClose for Point<T>
where
    T: Float,
{
    type Scalar = T;

    fn is_close(&self, rhs: &Self, tolerance: &Tolerance<T>) -> bool {
        self.x.is_close(&rhs.x, tolerance) && self.y.is_close(&rhs.y, tolerance)
    }
}

impl<T> Point<T>
where
    T: Float,
{
    /// Returns the length of the vector from the origin to self.
    pub fn norm(&self) -> T {
        self.x.hypot(self.y)
    }

    /// Returns the unit vector with the same direction as self, or the zero vector if self has
    /// no length.
    pub fn normalized(self) -> Self {
        let norm = self.norm();
        if norm.is_zero() {
            return Self {
                x: T::zero(),
                y: T::zero(),
            };
        }

        Self {
            x: self.x / norm,
            y: self.y / norm,
        }
    }

    /// Returns self rotated a quarter turn clockwise on a y-down canvas.
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }
}

/// A constructor macro for [`Point`].
#[macro_export]
macro_rules! point {
    ($x:expr, $y:expr) => {
        $crate::Point { x: $x, y: $y }
    };
}
