use nalgebra::{IsometryMatrix2, RealField, Rotation2, Translation2};
use num_traits::{Float, FromPrimitive};
use serde::{Deserialize, Serialize};

use crate::context::{LayoutContext, LayoutDirection};
use crate::edges::Edges;
use crate::orient::Orientation;
use crate::point::Point2;
use crate::ratio::Ratio;
use crate::size::Size;

/// Selects the smallest, middle, or largest coordinate along one axis of a
/// rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bound {
    /// The smallest coordinate of the axis.
    Min,
    /// The midpoint of the axis.
    Mid,
    /// The largest coordinate of the axis.
    Max,
}

/// Per-axis policy for aligning one rectangle relative to another.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    /// Keep the current position on this axis.
    None,
    /// Align the midpoints of the two rectangles.
    Center,
    /// Align the leading (smallest coordinate) edges.
    Min,
    /// Align the trailing (largest coordinate) edges.
    Max,
}

/// An axis-aligned rectangle defined by an origin point and a size.
///
/// The origin is the corner with the smallest coordinates in a y-up
/// convention. Accessor setters move the rectangle rigidly: they translate
/// the origin so the accessor lands on the assigned point, and never change
/// the size.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<Num = f64> {
    origin: Point2<Num>,
    size: Size<Num>,
}

impl<Num: Float + FromPrimitive> Rect<Num> {
    /// Creates a rectangle from its origin and size.
    pub fn new(origin: Point2<Num>, size: Size<Num>) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from scalar origin coordinates and dimensions.
    pub fn from_coords(x: Num, y: Num, width: Num, height: Num) -> Self {
        Self {
            origin: Point2::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Returns origin of the rectangle.
    pub fn origin(&self) -> Point2<Num> {
        self.origin
    }

    /// Returns size of the rectangle.
    pub fn size(&self) -> Size<Num> {
        self.size
    }

    /// Returns width of the rectangle.
    pub fn width(&self) -> Num {
        self.size.width()
    }

    /// Returns height of the rectangle.
    pub fn height(&self) -> Num {
        self.size.height()
    }

    /// Returns the smallest x coordinate.
    pub fn x_min(&self) -> Num {
        self.origin.x()
    }

    /// Returns the x coordinate of the rectangle's vertical midline.
    pub fn x_mid(&self) -> Num {
        self.origin.x() + self.size.half_width()
    }

    /// Returns the largest x coordinate.
    pub fn x_max(&self) -> Num {
        self.origin.x() + self.size.width()
    }

    /// Returns the smallest y coordinate.
    pub fn y_min(&self) -> Num {
        self.origin.y()
    }

    /// Returns the y coordinate of the rectangle's horizontal midline.
    pub fn y_mid(&self) -> Num {
        self.origin.y() + self.size.half_height()
    }

    /// Returns the largest y coordinate.
    pub fn y_max(&self) -> Num {
        self.origin.y() + self.size.height()
    }

    /// Returns true if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.size.is_zero()
    }

    /// Returns true if any coordinate or dimension is not finite.
    pub fn is_infinite(&self) -> bool {
        !(self.origin.x().is_finite()
            && self.origin.y().is_finite()
            && self.size.width().is_finite()
            && self.size.height().is_finite())
    }

    /// Returns the boundary or interior point selected by a per-axis
    /// [`Bound`].
    pub fn bound_point(&self, x_bound: Bound, y_bound: Bound) -> Point2<Num> {
        let x = match x_bound {
            Bound::Min => self.x_min(),
            Bound::Mid => self.x_mid(),
            Bound::Max => self.x_max(),
        };
        let y = match y_bound {
            Bound::Min => self.y_min(),
            Bound::Mid => self.y_mid(),
            Bound::Max => self.y_max(),
        };
        Point2::new(x, y)
    }

    /// Returns the rectangle translated so the selected bound point lands
    /// on `point`. The size is unchanged.
    pub fn with_bound_point(&self, x_bound: Bound, y_bound: Bound, point: Point2<Num>) -> Self {
        let shift = point - self.bound_point(x_bound, y_bound);
        Self {
            origin: self.origin + shift,
            size: self.size,
        }
    }

    /// Moves the rectangle rigidly so the selected bound point lands on
    /// `point`.
    pub fn set_bound_point(&mut self, x_bound: Bound, y_bound: Bound, point: Point2<Num>) {
        *self = self.with_bound_point(x_bound, y_bound, point);
    }

    /// Returns the center of the rectangle.
    pub fn center(&self) -> Point2<Num> {
        self.bound_point(Bound::Mid, Bound::Mid)
    }

    /// Moves the rectangle rigidly so its center lands on `point`.
    pub fn set_center(&mut self, point: Point2<Num>) {
        self.set_bound_point(Bound::Mid, Bound::Mid, point);
    }

    /// Returns the corner with the smallest x and y coordinates.
    pub fn bottom_left(&self) -> Point2<Num> {
        self.bound_point(Bound::Min, Bound::Min)
    }

    /// Moves the rectangle rigidly so its bottom-left corner lands on
    /// `point`.
    pub fn set_bottom_left(&mut self, point: Point2<Num>) {
        self.set_bound_point(Bound::Min, Bound::Min, point);
    }

    /// Returns the corner with the largest x and smallest y coordinate.
    pub fn bottom_right(&self) -> Point2<Num> {
        self.bound_point(Bound::Max, Bound::Min)
    }

    /// Moves the rectangle rigidly so its bottom-right corner lands on
    /// `point`.
    pub fn set_bottom_right(&mut self, point: Point2<Num>) {
        self.set_bound_point(Bound::Max, Bound::Min, point);
    }

    /// Returns the corner with the smallest x and largest y coordinate.
    pub fn top_left(&self) -> Point2<Num> {
        self.bound_point(Bound::Min, Bound::Max)
    }

    /// Moves the rectangle rigidly so its top-left corner lands on `point`.
    pub fn set_top_left(&mut self, point: Point2<Num>) {
        self.set_bound_point(Bound::Min, Bound::Max, point);
    }

    /// Returns the corner with the largest x and y coordinates.
    pub fn top_right(&self) -> Point2<Num> {
        self.bound_point(Bound::Max, Bound::Max)
    }

    /// Moves the rectangle rigidly so its top-right corner lands on `point`.
    pub fn set_top_right(&mut self, point: Point2<Num>) {
        self.set_bound_point(Bound::Max, Bound::Max, point);
    }

    /// Returns the midpoint of the leading vertical edge.
    pub fn left_center(&self) -> Point2<Num> {
        self.bound_point(Bound::Min, Bound::Mid)
    }

    /// Moves the rectangle rigidly so its left edge midpoint lands on
    /// `point`.
    pub fn set_left_center(&mut self, point: Point2<Num>) {
        self.set_bound_point(Bound::Min, Bound::Mid, point);
    }

    /// Returns the midpoint of the trailing vertical edge.
    pub fn right_center(&self) -> Point2<Num> {
        self.bound_point(Bound::Max, Bound::Mid)
    }

    /// Moves the rectangle rigidly so its right edge midpoint lands on
    /// `point`.
    pub fn set_right_center(&mut self, point: Point2<Num>) {
        self.set_bound_point(Bound::Max, Bound::Mid, point);
    }

    /// Returns the midpoint of the bottom edge.
    pub fn bottom_center(&self) -> Point2<Num> {
        self.bound_point(Bound::Mid, Bound::Min)
    }

    /// Moves the rectangle rigidly so its bottom edge midpoint lands on
    /// `point`.
    pub fn set_bottom_center(&mut self, point: Point2<Num>) {
        self.set_bound_point(Bound::Mid, Bound::Min, point);
    }

    /// Returns the midpoint of the top edge.
    pub fn top_center(&self) -> Point2<Num> {
        self.bound_point(Bound::Mid, Bound::Max)
    }

    /// Moves the rectangle rigidly so its top edge midpoint lands on
    /// `point`.
    pub fn set_top_center(&mut self, point: Point2<Num>) {
        self.set_bound_point(Bound::Mid, Bound::Max, point);
    }

    /// Returns the point at a normalized anchor coordinate within the
    /// rectangle.
    ///
    /// The anchor's components address the unit square: `(0, 0)` is the
    /// origin corner and `(1, 1)` the opposite one. A right-to-left layout
    /// direction mirrors the x anchor, and a vertically flipped drawing
    /// context mirrors the y anchor.
    pub fn anchor_point(&self, anchor: Point2<Num>, context: &LayoutContext) -> Point2<Num> {
        let one = Num::one();
        let ax = match context.direction {
            LayoutDirection::LeftToRight => anchor.x(),
            LayoutDirection::RightToLeft => one - anchor.x(),
        };
        let ay = if context.flipped {
            one - anchor.y()
        } else {
            anchor.y()
        };

        Point2::new(
            self.x_min() + self.width() * ax,
            self.y_min() + self.height() * ay,
        )
    }

    /// Returns the rectangle translated so the given anchor lands on
    /// `point`. The size is unchanged.
    pub fn with_anchor_point(
        &self,
        anchor: Point2<Num>,
        point: Point2<Num>,
        context: &LayoutContext,
    ) -> Self {
        let shift = point - self.anchor_point(anchor, context);
        Self {
            origin: self.origin + shift,
            size: self.size,
        }
    }

    /// Moves the rectangle rigidly so the given anchor lands on `point`.
    pub fn set_anchor_point(
        &mut self,
        anchor: Point2<Num>,
        point: Point2<Num>,
        context: &LayoutContext,
    ) {
        *self = self.with_anchor_point(anchor, point, context);
    }

    /// Returns the rectangle repositioned so its center coincides with
    /// `point`.
    ///
    /// Empty and non-finite rectangles are returned unchanged, as their
    /// center arithmetic would produce NaN origins.
    pub fn centered_at(&self, point: Point2<Num>) -> Self {
        if self.is_empty() || self.is_infinite() {
            return *self;
        }
        self.with_bound_point(Bound::Mid, Bound::Mid, point)
    }

    /// Returns the rectangle repositioned so its center coincides with the
    /// center of `other`. Empty and non-finite rectangles are returned
    /// unchanged.
    pub fn centered_in(&self, other: &Self) -> Self {
        self.centered_at(other.center())
    }

    /// Returns the rectangle aligned relative to `other` with an
    /// independent policy per axis. The size is unchanged.
    pub fn aligned(&self, other: &Self, x_axis: Alignment, y_axis: Alignment) -> Self {
        let x = match x_axis {
            Alignment::None => self.x_min(),
            Alignment::Center => other.x_mid() - self.size.half_width(),
            Alignment::Min => other.x_min(),
            Alignment::Max => other.x_max() - self.width(),
        };
        let y = match y_axis {
            Alignment::None => self.y_min(),
            Alignment::Center => other.y_mid() - self.size.half_height(),
            Alignment::Min => other.y_min(),
            Alignment::Max => other.y_max() - self.height(),
        };
        Self {
            origin: Point2::new(x, y),
            size: self.size,
        }
    }

    /// Returns the rectangle shrunk by `amount` from each edge in `edges`.
    ///
    /// Each flagged edge moves inward while the opposite edge stays fixed.
    /// A negative amount grows the rectangle; an empty edge set returns the
    /// rectangle unchanged.
    pub fn inset(&self, edges: Edges, amount: Num) -> Self {
        if edges.is_empty() {
            return *self;
        }

        let mut x = self.x_min();
        let mut y = self.y_min();
        let mut width = self.width();
        let mut height = self.height();

        if edges.contains(Edges::MIN_X) {
            x = x + amount;
            width = width - amount;
        }
        if edges.contains(Edges::MAX_X) {
            width = width - amount;
        }
        if edges.contains(Edges::MIN_Y) {
            y = y + amount;
            height = height - amount;
        }
        if edges.contains(Edges::MAX_Y) {
            height = height - amount;
        }

        Self::from_coords(x, y, width, height)
    }

    /// Returns the rectangle grown by `amount` along each edge in `edges`.
    /// Equivalent to an inset by the negated amount.
    pub fn outset(&self, edges: Edges, amount: Num) -> Self {
        self.inset(edges, -amount)
    }

    /// Classifies the rectangle's width/height ratio against `1.0`.
    pub fn orientation(&self) -> Orientation {
        Ratio::new(self.width(), self.height()).orientation()
    }

    /// Returns the four corners in order: bottom-left, top-left, top-right,
    /// bottom-right.
    pub fn corners(&self) -> [Point2<Num>; 4] {
        [
            Point2::new(self.x_min(), self.y_min()),
            Point2::new(self.x_min(), self.y_max()),
            Point2::new(self.x_max(), self.y_max()),
            Point2::new(self.x_max(), self.y_min()),
        ]
    }
}

impl<Num: Float + FromPrimitive + RealField> Rect<Num> {
    fn pivot_rotation(pivot: Point2<Num>, angle: Num) -> IsometryMatrix2<Num> {
        Translation2::new(pivot.x(), pivot.y())
            * Rotation2::new(angle)
            * Translation2::new(-pivot.x(), -pivot.y())
    }

    fn transform_point(isometry: &IsometryMatrix2<Num>, point: Point2<Num>) -> Point2<Num> {
        let rotated = isometry.transform_point(&nalgebra::Point2::new(point.x(), point.y()));
        Point2::new(rotated.x, rotated.y)
    }

    /// Returns the four corners rotated rigidly around `pivot` by `angle`
    /// radians, counter-clockwise for positive angles.
    ///
    /// The transform is composed as translate-to-pivot, rotate, translate
    /// back. The result is returned as the rotated quadrangle, since it is
    /// no longer axis-aligned.
    pub fn rotated(&self, pivot: Point2<Num>, angle: Num) -> [Point2<Num>; 4] {
        let isometry = Self::pivot_rotation(pivot, angle);
        self.corners()
            .map(|corner| Self::transform_point(&isometry, corner))
    }

    /// Returns the rectangle slid along the rotational arc around `pivot`
    /// by `angle` radians.
    ///
    /// Only the center moves: the same rigid rotation as [`Rect::rotated`]
    /// is applied to the center point alone, so the rectangle stays
    /// axis-aligned and keeps its size.
    pub fn slid(&self, pivot: Point2<Num>, angle: Num) -> Self {
        let isometry = Self::pivot_rotation(pivot, angle);
        let center = Self::transform_point(&isometry, self.center());
        self.with_bound_point(Bound::Mid, Bound::Mid, center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn rect(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect::from_coords(x, y, width, height)
    }

    #[test]
    fn derived_coordinates() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert_eq!(r.center(), Point2::new(5.0, 5.0));
        assert_eq!(r.x_mid(), 5.0);
        assert_eq!(r.y_max(), 10.0);
        assert_eq!(r.bottom_left(), Point2::new(0.0, 0.0));
        assert_eq!(r.top_right(), Point2::new(10.0, 10.0));
        assert_eq!(r.left_center(), Point2::new(0.0, 5.0));
        assert_eq!(r.top_center(), Point2::new(5.0, 10.0));
    }

    #[test]
    fn setters_move_rigidly() {
        let target = Point2::new(7.0, -3.0);
        let original = rect(1.0, 2.0, 4.0, 6.0);

        let accessors: [(
            fn(&Rect) -> Point2,
            fn(&mut Rect, Point2),
        ); 5] = [
            (Rect::center, Rect::set_center),
            (Rect::bottom_left, Rect::set_bottom_left),
            (Rect::top_right, Rect::set_top_right),
            (Rect::left_center, Rect::set_left_center),
            (Rect::bottom_center, Rect::set_bottom_center),
        ];

        for (get, set) in accessors {
            let mut r = original;
            set(&mut r, target);
            assert_eq!(get(&r), target);
            assert_eq!(r.size(), original.size());
        }
    }

    #[test]
    fn bound_point_generalizes_named_accessors() {
        let r = rect(2.0, 3.0, 4.0, 6.0);
        assert_eq!(r.bound_point(Bound::Min, Bound::Max), r.top_left());
        assert_eq!(r.bound_point(Bound::Max, Bound::Mid), r.right_center());

        let mut moved = r;
        moved.set_bound_point(Bound::Max, Bound::Max, Point2::new(0.0, 0.0));
        assert_eq!(moved.top_right(), Point2::new(0.0, 0.0));
        assert_eq!(moved.origin(), Point2::new(-4.0, -6.0));
    }

    #[test]
    fn anchor_point_interpolates() {
        let r = rect(0.0, 0.0, 10.0, 20.0);
        let ctx = LayoutContext::default();

        assert_eq!(r.anchor_point(Point2::new(0.0, 0.0), &ctx), r.origin());
        assert_eq!(r.anchor_point(Point2::new(1.0, 1.0), &ctx), r.top_right());
        assert_eq!(
            r.anchor_point(Point2::new(0.5, 0.5), &ctx),
            Point2::new(5.0, 10.0)
        );
        assert_eq!(
            r.anchor_point(Point2::new(0.25, 0.5), &ctx),
            Point2::new(2.5, 10.0)
        );
    }

    #[test]
    fn anchor_point_honors_context_flags() {
        let r = rect(0.0, 0.0, 10.0, 20.0);

        let rtl = LayoutContext::new(LayoutDirection::RightToLeft, false);
        assert_eq!(
            r.anchor_point(Point2::new(0.0, 0.0), &rtl),
            Point2::new(10.0, 0.0)
        );

        let flipped = LayoutContext::new(LayoutDirection::LeftToRight, true);
        assert_eq!(
            r.anchor_point(Point2::new(0.0, 0.0), &flipped),
            Point2::new(0.0, 20.0)
        );
    }

    #[test]
    fn set_anchor_point_translates() {
        let mut r = rect(0.0, 0.0, 10.0, 20.0);
        let ctx = LayoutContext::default();
        r.set_anchor_point(Point2::new(0.5, 0.5), Point2::new(0.0, 0.0), &ctx);
        assert_eq!(r.origin(), Point2::new(-5.0, -10.0));
        assert_eq!(r.size(), Size::new(10.0, 20.0));
    }

    #[test]
    fn centering() {
        let r = rect(0.0, 0.0, 4.0, 4.0);
        let centered = r.centered_at(Point2::new(0.0, 0.0));
        assert_eq!(centered.origin(), Point2::new(-2.0, -2.0));

        let outer = rect(10.0, 10.0, 20.0, 20.0);
        assert_eq!(r.centered_in(&outer).center(), Point2::new(20.0, 20.0));
    }

    #[test]
    fn centering_degenerate_rects_is_identity() {
        let empty = rect(3.0, 4.0, 0.0, 5.0);
        assert_eq!(empty.centered_at(Point2::new(100.0, 100.0)), empty);

        let infinite = rect(0.0, 0.0, f64::INFINITY, 1.0);
        assert_eq!(infinite.centered_at(Point2::new(1.0, 1.0)), infinite);
    }

    #[test]
    fn alignment() {
        let inner = rect(0.0, 0.0, 2.0, 2.0);
        let outer = rect(10.0, 10.0, 10.0, 10.0);

        let aligned = inner.aligned(&outer, Alignment::Min, Alignment::Max);
        assert_eq!(aligned.origin(), Point2::new(10.0, 18.0));

        let centered = inner.aligned(&outer, Alignment::Center, Alignment::None);
        assert_eq!(centered.origin(), Point2::new(14.0, 0.0));

        assert_eq!(inner.aligned(&outer, Alignment::None, Alignment::None), inner);
    }

    #[test]
    fn inset_and_outset() {
        let r = rect(0.0, 0.0, 10.0, 10.0);

        let inset = r.inset(Edges::MIN_X, 2.0);
        assert_eq!(inset.origin(), Point2::new(2.0, 0.0));
        assert_eq!(inset.size(), Size::new(8.0, 10.0));

        let outset = r.outset(Edges::MAX_Y, 2.0);
        assert_eq!(outset.origin(), Point2::new(0.0, 0.0));
        assert_eq!(outset.size(), Size::new(10.0, 12.0));

        let shrunk = r.inset(Edges::ALL, 1.0);
        assert_eq!(shrunk, rect(1.0, 1.0, 8.0, 8.0));

        assert_eq!(r.inset(Edges::empty(), 5.0), r);
    }

    #[test]
    fn orientation() {
        assert_eq!(rect(0.0, 0.0, 16.0, 9.0).orientation(), Orientation::Landscape);
        assert_eq!(rect(0.0, 0.0, 9.0, 16.0).orientation(), Orientation::Portrait);
        assert_eq!(rect(0.0, 0.0, 5.0, 5.0).orientation(), Orientation::Square);
    }

    #[test]
    fn rotation_around_center_permutes_corners() {
        let r = rect(0.0, 0.0, 2.0, 2.0);
        let rotated = r.rotated(r.center(), FRAC_PI_2);

        // A quarter turn around the center maps each corner onto the next.
        let corners = r.corners();
        for (quarter_turn, expected) in rotated.iter().zip([
            corners[3],
            corners[0],
            corners[1],
            corners[2],
        ]) {
            assert_abs_diff_eq!(*quarter_turn, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn rotation_around_external_pivot() {
        let r = rect(1.0, -1.0, 2.0, 2.0);
        let rotated = r.rotated(Point2::new(0.0, 0.0), PI);
        assert_abs_diff_eq!(rotated[0], Point2::new(-1.0, 1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(rotated[2], Point2::new(-3.0, -1.0), epsilon = 1e-12);
    }

    #[test]
    fn slide_preserves_size_and_axis_alignment() {
        let r = rect(0.0, 0.0, 2.0, 2.0);
        let slid = r.slid(Point2::new(0.0, 0.0), FRAC_PI_2);

        // Center (1, 1) travels to (-1, 1); the extent is untouched.
        assert_abs_diff_eq!(slid.center(), Point2::new(-1.0, 1.0), epsilon = 1e-12);
        assert_eq!(slid.size(), r.size());
    }
}
