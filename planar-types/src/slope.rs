use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::point::Point2;

/// A line in slope-intercept form, `y = m·x + b`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slope<Num = f64> {
    m: Num,
    b: Num,
}

impl<Num: Float> Slope<Num> {
    /// Creates a line with gradient `m` and y-intercept `b`.
    pub fn new(m: Num, b: Num) -> Self {
        Self { m, b }
    }

    /// Returns gradient of the line.
    pub fn gradient(&self) -> Num {
        self.m
    }

    /// Returns y-intercept of the line.
    pub fn intercept(&self) -> Num {
        self.b
    }

    /// Returns the y value of the line at `x`.
    pub fn y_at(&self, x: Num) -> Num {
        self.m * x + self.b
    }

    /// Returns the point where two lines cross, or `None` when the
    /// gradients are numerically identical.
    ///
    /// Parallel and coincident lines are not distinguished; both produce
    /// `None`.
    pub fn intersection(&self, other: &Self) -> Option<Point2<Num>> {
        if self.m == other.m {
            return None;
        }

        let x = (other.b - self.b) / (self.m - other.m);
        Some(Point2::new(x, self.y_at(x)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection() {
        let a = Slope::new(1.0, 0.0);
        let b = Slope::new(-1.0, 2.0);
        assert_eq!(a.intersection(&b), Some(Point2::new(1.0, 1.0)));
        assert_eq!(b.intersection(&a), Some(Point2::new(1.0, 1.0)));
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let a = Slope::new(1.0, 0.0);
        let b = Slope::new(1.0, 5.0);
        assert_eq!(a.intersection(&b), None);
        // Coincident lines are treated the same as parallel ones.
        assert_eq!(a.intersection(&a), None);
    }

    #[test]
    fn evaluation() {
        let line = Slope::new(2.0, -1.0);
        assert_eq!(line.y_at(0.0), -1.0);
        assert_eq!(line.y_at(3.0), 5.0);
    }
}
