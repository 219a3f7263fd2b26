use num_traits::{Float, FromPrimitive, NumCast};
use serde::{Deserialize, Serialize};

use crate::traits::BiComponent;

/// Dimensions of a 2-dimensional area.
///
/// Width and height are not constrained to be positive; a zero or negative
/// extent is the caller's convention to interpret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size<Num = f64> {
    width: Num,
    height: Num,
}

impl<Num: Float + FromPrimitive> Size<Num> {
    /// Creates a new size with the given dimensions.
    pub fn new(width: Num, height: Num) -> Self {
        Self { width, height }
    }

    /// Returns width of the size.
    pub fn width(&self) -> Num {
        self.width
    }

    /// Returns half of the width.
    pub fn half_width(&self) -> Num {
        self.width / Num::from_f64(2.0).expect("const conversion failed")
    }

    /// Returns height of the size.
    pub fn height(&self) -> Num {
        self.height
    }

    /// Returns half of the height.
    pub fn half_height(&self) -> Num {
        self.height / Num::from_f64(2.0).expect("const conversion failed")
    }

    /// Returns the area covered by this size.
    pub fn area(&self) -> Num {
        self.width * self.height
    }

    /// Returns true if either dimension is zero.
    pub fn is_zero(&self) -> bool {
        self.width.is_zero() || self.height.is_zero()
    }

    /// Converts the dimensions into another scalar type, if both values are
    /// representable in it.
    pub fn cast<T: Float + FromPrimitive>(&self) -> Option<Size<T>> {
        Some(Size {
            width: NumCast::from(self.width)?,
            height: NumCast::from(self.height)?,
        })
    }
}

impl<Num: Float + FromPrimitive> BiComponent for Size<Num> {
    type Num = Num;

    fn pair(&self) -> (Num, Num) {
        (self.width, self.height)
    }

    fn from_pair(width: Num, height: Num) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_and_area() {
        let size = Size::new(10.0, 4.0);
        assert_eq!(size.half_width(), 5.0);
        assert_eq!(size.half_height(), 2.0);
        assert_eq!(size.area(), 40.0);
        assert!(!size.is_zero());
        assert!(Size::new(0.0, 4.0).is_zero());
    }

    #[test]
    fn cast() {
        let size: Size<f64> = Size::new(1.5, 2.5);
        let cast: Size<f32> = size.cast().unwrap();
        assert_eq!(cast, Size::new(1.5f32, 2.5));
    }
}
