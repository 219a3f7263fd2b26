use serde::{Deserialize, Serialize};

/// Shape classification of a width-to-height factor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Width and height are exactly equal.
    Square,
    /// Width is greater than height.
    Landscape,
    /// Width is less than height.
    Portrait,
}

impl Orientation {
    /// Classifies a width/height factor against `1.0`.
    ///
    /// The comparison is exact, with no tolerance. A NaN factor compares
    /// neither equal nor greater and therefore classifies as `Portrait`.
    pub fn of_factor<Num: num_traits::Num + PartialOrd>(factor: Num) -> Self {
        if factor == Num::one() {
            Self::Square
        } else if factor > Num::one() {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert_eq!(Orientation::of_factor(1.0), Orientation::Square);
        assert_eq!(Orientation::of_factor(16.0 / 9.0), Orientation::Landscape);
        assert_eq!(Orientation::of_factor(0.5), Orientation::Portrait);
    }
}
