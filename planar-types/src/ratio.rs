use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::orient::Orientation;

/// A ratio between two scalar quantities.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ratio<Num = f64> {
    a: Num,
    b: Num,
}

impl<Num: Float> Ratio<Num> {
    /// Creates the ratio of `a` to `b`.
    pub fn new(a: Num, b: Num) -> Self {
        Self { a, b }
    }

    /// Returns numerator of the ratio.
    pub fn numerator(&self) -> Num {
        self.a
    }

    /// Returns denominator of the ratio.
    pub fn denominator(&self) -> Num {
        self.b
    }

    /// Returns `a / b`. A zero denominator follows native floating point
    /// semantics (infinity or NaN).
    pub fn factor(&self) -> Num {
        self.a / self.b
    }

    /// Classifies the ratio's factor against `1.0`.
    pub fn orientation(&self) -> Orientation {
        Orientation::of_factor(self.factor())
    }

    /// Returns the ratio of `b` to `a`.
    pub fn inverted(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}
