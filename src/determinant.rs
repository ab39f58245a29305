use std::ops::{Mul, Sub};

use num_traits::Signed;

use crate::Point;

/// The scalar value representing the determinant between two vectors.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Determinant<T>(T);

impl<T> From<[&Point<T>; 3]> for Determinant<T>
where
    T: Copy + Sub<Output = T> + Mul<Output = T>,
{
    /// Returns the determinant of the direction vectors `AB` and `AC`.
    fn from([a, b, c]: [&Point<T>; 3]) -> Self {
        Self((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y))
    }
}

impl<T> Determinant<T>
where
    T: Signed,
{
    /// Returns true if the number is negative and false if the number is zero or positive.
    pub(crate) fn is_negative(&self) -> bool {
        self.0.is_negative()
    }
}
