use num_traits::{Float, FromPrimitive, Zero};

/// A value fully described by two independent scalar components.
///
/// Implementing this trait requires only a way to read and construct the
/// component pair; arithmetic, clamping and approximate equality are
/// supplied as default methods. Because every operation takes the other
/// operand as `impl BiComponent<Num = Self::Num>`, the operations work
/// across different concrete types: a point can be offset by a size,
/// clamped between a vector and a point, and so on.
pub trait BiComponent: Sized {
    /// Scalar type of the components.
    type Num: Float + FromPrimitive;

    /// Returns the two components as a pair.
    fn pair(&self) -> (Self::Num, Self::Num);

    /// Creates a value from a pair of components.
    fn from_pair(a: Self::Num, b: Self::Num) -> Self;

    /// Creates a value with both components set to `v`.
    fn uniform(v: Self::Num) -> Self {
        Self::from_pair(v, v)
    }

    /// Creates a value with only the first (horizontal) component set.
    fn horizontal(v: Self::Num) -> Self {
        Self::from_pair(v, Self::Num::zero())
    }

    /// Creates a value with only the second (vertical) component set.
    fn vertical(v: Self::Num) -> Self {
        Self::from_pair(Self::Num::zero(), v)
    }

    /// Creates a value from a pair of `f64`s, if representable in `Num`.
    fn from_f64s(a: f64, b: f64) -> Option<Self> {
        Some(Self::from_pair(
            Self::Num::from_f64(a)?,
            Self::Num::from_f64(b)?,
        ))
    }

    /// Creates a value from a pair of integers, if representable in `Num`.
    fn from_ints(a: i64, b: i64) -> Option<Self> {
        Some(Self::from_pair(
            Self::Num::from_i64(a)?,
            Self::Num::from_i64(b)?,
        ))
    }

    /// Component-wise sum with another two-component value.
    fn component_add<T: BiComponent<Num = Self::Num>>(&self, rhs: &T) -> Self {
        let (a, b) = self.pair();
        let (ra, rb) = rhs.pair();
        Self::from_pair(a + ra, b + rb)
    }

    /// Component-wise difference with another two-component value.
    fn component_sub<T: BiComponent<Num = Self::Num>>(&self, rhs: &T) -> Self {
        let (a, b) = self.pair();
        let (ra, rb) = rhs.pair();
        Self::from_pair(a - ra, b - rb)
    }

    /// Component-wise product with another two-component value.
    fn component_mul<T: BiComponent<Num = Self::Num>>(&self, rhs: &T) -> Self {
        let (a, b) = self.pair();
        let (ra, rb) = rhs.pair();
        Self::from_pair(a * ra, b * rb)
    }

    /// Component-wise quotient with another two-component value.
    ///
    /// A zero component in `rhs` is not guarded against; the result follows
    /// native floating point semantics (infinity or NaN).
    fn component_div<T: BiComponent<Num = Self::Num>>(&self, rhs: &T) -> Self {
        let (a, b) = self.pair();
        let (ra, rb) = rhs.pair();
        Self::from_pair(a / ra, b / rb)
    }

    /// Adds a scalar to both components.
    fn add_scalar(&self, rhs: Self::Num) -> Self {
        let (a, b) = self.pair();
        Self::from_pair(a + rhs, b + rhs)
    }

    /// Subtracts a scalar from both components.
    fn sub_scalar(&self, rhs: Self::Num) -> Self {
        let (a, b) = self.pair();
        Self::from_pair(a - rhs, b - rhs)
    }

    /// Multiplies both components by a scalar.
    fn mul_scalar(&self, rhs: Self::Num) -> Self {
        let (a, b) = self.pair();
        Self::from_pair(a * rhs, b * rhs)
    }

    /// Divides both components by a scalar, with native float semantics for
    /// a zero divisor.
    fn div_scalar(&self, rhs: Self::Num) -> Self {
        let (a, b) = self.pair();
        Self::from_pair(a / rhs, b / rhs)
    }

    /// Replaces `self` with the scalar-broadcast sum.
    fn add_scalar_assign(&mut self, rhs: Self::Num) {
        *self = self.add_scalar(rhs);
    }

    /// Replaces `self` with the scalar-broadcast difference.
    fn sub_scalar_assign(&mut self, rhs: Self::Num) {
        *self = self.sub_scalar(rhs);
    }

    /// Replaces `self` with the scalar-broadcast product.
    fn mul_scalar_assign(&mut self, rhs: Self::Num) {
        *self = self.mul_scalar(rhs);
    }

    /// Replaces `self` with the scalar-broadcast quotient.
    fn div_scalar_assign(&mut self, rhs: Self::Num) {
        *self = self.div_scalar(rhs);
    }

    /// Replaces `self` with the component-wise sum.
    fn add_assign<T: BiComponent<Num = Self::Num>>(&mut self, rhs: &T) {
        *self = self.component_add(rhs);
    }

    /// Replaces `self` with the component-wise difference.
    fn sub_assign<T: BiComponent<Num = Self::Num>>(&mut self, rhs: &T) {
        *self = self.component_sub(rhs);
    }

    /// Replaces `self` with the component-wise product.
    fn mul_assign<T: BiComponent<Num = Self::Num>>(&mut self, rhs: &T) {
        *self = self.component_mul(rhs);
    }

    /// Replaces `self` with the component-wise quotient.
    fn div_assign<T: BiComponent<Num = Self::Num>>(&mut self, rhs: &T) {
        *self = self.component_div(rhs);
    }

    /// Clamps each component between the corresponding components of
    /// `lower` and `upper`.
    ///
    /// The bounds may be different concrete types, as long as they share
    /// the scalar type.
    fn clamped<L, U>(&self, lower: &L, upper: &U) -> Self
    where
        L: BiComponent<Num = Self::Num>,
        U: BiComponent<Num = Self::Num>,
    {
        let (a, b) = self.pair();
        let (la, lb) = lower.pair();
        let (ua, ub) = upper.pair();
        Self::from_pair(a.max(la).min(ua), b.max(lb).min(ub))
    }

    /// Replaces `self` with its clamped value.
    fn clamp<L, U>(&mut self, lower: &L, upper: &U)
    where
        L: BiComponent<Num = Self::Num>,
        U: BiComponent<Num = Self::Num>,
    {
        *self = self.clamped(lower, upper);
    }

    /// Structural equality of the component pairs, across concrete types.
    fn component_eq<T: BiComponent<Num = Self::Num>>(&self, other: &T) -> bool {
        self.pair() == other.pair()
    }

    /// Approximate equality with a magnitude-relative tolerance.
    ///
    /// Exactly equal pairs compare equal immediately. Otherwise each
    /// component's difference must be finite and no larger than
    /// `max(abs_tol, scale * rel_tol)`, where `rel_tol` is the square root
    /// of the machine epsilon, `abs_tol` is `rel_tol` times the smallest
    /// positive normal magnitude, and `scale` is the larger magnitude of
    /// the two operands on that axis. A non-finite difference on either
    /// axis (one operand NaN or infinite) compares unequal even when the
    /// other axis matches exactly.
    fn approx_eq<T: BiComponent<Num = Self::Num>>(&self, other: &T) -> bool {
        let (a0, a1) = self.pair();
        let (b0, b1) = other.pair();
        if a0 == b0 && a1 == b1 {
            return true;
        }

        let d0 = (a0 - b0).abs();
        let d1 = (a1 - b1).abs();
        if !d0.is_finite() || !d1.is_finite() {
            return false;
        }

        let rel_tol = Self::Num::epsilon().sqrt();
        let abs_tol = rel_tol * Self::Num::min_positive_value();
        let s0 = a0.abs().max(b0.abs());
        let s1 = a1.abs().max(b1.abs());
        d0 <= abs_tol.max(s0 * rel_tol) && d1 <= abs_tol.max(s1 * rel_tol)
    }
}

/// Raw scalar pairs participate in the component-wise operations directly,
/// so literal operands like `(1.0, 2.0)` work everywhere a two-component
/// value is accepted.
impl<Num: Float + FromPrimitive> BiComponent for (Num, Num) {
    type Num = Num;

    fn pair(&self) -> (Num, Num) {
        *self
    }

    fn from_pair(a: Num, b: Num) -> Self {
        (a, b)
    }
}
