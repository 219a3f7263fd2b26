use serde::{Deserialize, Serialize};

/// Direction in which text and interface elements are laid out.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutDirection {
    /// Left-to-right layout.
    #[default]
    LeftToRight,
    /// Right-to-left layout.
    RightToLeft,
}

/// Conventions of the host drawing environment that affect how anchor
/// coordinates are interpreted.
///
/// The library never queries the host itself; callers capture the host's
/// state in this value and pass it to the anchor operations explicitly.
/// The default is a left-to-right, non-flipped context.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutContext {
    /// Current text layout direction. Right-to-left mirrors the x axis of
    /// anchor coordinates.
    pub direction: LayoutDirection,
    /// Whether the drawing coordinate system is vertically flipped.
    /// A flipped context mirrors the y axis of anchor coordinates.
    pub flipped: bool,
}

impl LayoutContext {
    /// Creates a context with the given direction and flip convention.
    pub fn new(direction: LayoutDirection, flipped: bool) -> Self {
        Self { direction, flipped }
    }
}
