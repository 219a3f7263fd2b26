use approx::AbsDiffEq;
use num_traits::{Float, FromPrimitive};
use serde::{Deserialize, Serialize};

use crate::traits::BiComponent;

/// Vector between two points in 2-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector2<Num = f64> {
    pub(crate) dx: Num,
    pub(crate) dy: Num,
}

impl<Num: Copy> Vector2<Num> {
    /// Creates a new vector with the given coordinates.
    pub fn new(dx: Num, dy: Num) -> Self {
        Self { dx, dy }
    }

    /// Returns x coordinate of the vector.
    pub fn dx(&self) -> Num {
        self.dx
    }

    /// Returns y coordinate of the vector.
    pub fn dy(&self) -> Num {
        self.dy
    }

    /// Updates x coordinate of the vector.
    pub fn set_dx(&mut self, dx: Num) {
        self.dx = dx;
    }

    /// Updates y coordinate of the vector.
    pub fn set_dy(&mut self, dy: Num) {
        self.dy = dy;
    }

    /// Returns squared magnitude (squared length) of the vector.
    pub fn magnitude_sq(&self) -> Num
    where
        Num: num_traits::Num,
    {
        self.dx * self.dx + self.dy * self.dy
    }

    /// Returns magnitude (length) of the vector.
    pub fn magnitude(&self) -> Num
    where
        Num: Float,
    {
        self.magnitude_sq().sqrt()
    }

    /// Returns direction of the vector as the angle from the positive x
    /// axis, in radians.
    pub fn direction(&self) -> Num
    where
        Num: Float,
    {
        self.dy.atan2(self.dx)
    }
}

impl<Num> std::ops::Mul<Num> for Vector2<Num>
where
    Num: std::ops::Mul<Num, Output = Num> + Copy,
{
    type Output = Vector2<Num>;

    fn mul(self, rhs: Num) -> Self::Output {
        Self {
            dx: self.dx * rhs,
            dy: self.dy * rhs,
        }
    }
}

impl<Num> std::ops::Neg for Vector2<Num>
where
    Num: std::ops::Neg<Output = Num>,
{
    type Output = Vector2<Num>;

    fn neg(self) -> Self::Output {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

impl<Num> AbsDiffEq for Vector2<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.dx.abs_diff_eq(&other.dx, epsilon) && self.dy.abs_diff_eq(&other.dy, epsilon)
    }
}

impl<Num: Float + FromPrimitive> BiComponent for Vector2<Num> {
    type Num = Num;

    fn pair(&self) -> (Num, Num) {
        (self.dx, self.dy)
    }

    fn from_pair(dx: Num, dy: Num) -> Self {
        Self { dx, dy }
    }
}
