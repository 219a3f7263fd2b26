use bitflags::bitflags;

bitflags! {
    /// A combinable set of a rectangle's directed edges.
    ///
    /// Used to select which sides an inset or outset applies to. The
    /// composite flags address both edges of one axis at once.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Edges: u8 {
        /// The vertical edge at the smallest x coordinate.
        const MIN_X = 0b0001;
        /// The horizontal edge at the smallest y coordinate.
        const MIN_Y = 0b0010;
        /// The vertical edge at the largest x coordinate.
        const MAX_X = 0b0100;
        /// The horizontal edge at the largest y coordinate.
        const MAX_Y = 0b1000;
        /// Both vertical edges.
        const HORIZONTAL = Self::MIN_X.bits() | Self::MAX_X.bits();
        /// Both horizontal edges.
        const VERTICAL = Self::MIN_Y.bits() | Self::MAX_Y.bits();
        /// All four edges.
        const ALL = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composites() {
        assert_eq!(Edges::MIN_X | Edges::MAX_X, Edges::HORIZONTAL);
        assert_eq!(Edges::MIN_Y | Edges::MAX_Y, Edges::VERTICAL);
        assert_eq!(Edges::HORIZONTAL | Edges::VERTICAL, Edges::ALL);
        assert!(Edges::ALL.contains(Edges::MIN_Y));
        assert!(Edges::default().is_empty());
    }
}
