//! Field selectors and the target/dependent pairing.
//!
//! Every editable field has exactly one partner that may move as a side
//! effect of correcting it:
//!
//! ```text
//!     absolute:   X ↔ Width      Y ↔ Height
//!     relative:   Left ↔ Right   Top ↔ Bottom
//! ```
//!
//! Each correction function takes the narrow selector it supports
//! ([`PositionAxis`], [`SizeAxis`], [`LowEdge`], [`HighEdge`]), so passing
//! `Width` to a position correction does not type-check. The wide selectors
//! ([`ClipField`], [`Edge`]) name any field and [`split`](ClipField::split)
//! into the narrow ones.

/// Position field of an absolute rect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PositionAxis {
    /// Horizontal origin.
    X,
    /// Vertical origin.
    Y,
}

/// Size field of an absolute rect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SizeAxis {
    /// Horizontal extent.
    Width,
    /// Vertical extent.
    Height,
}

/// Any field of an absolute rect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClipField {
    /// Horizontal origin.
    X,
    /// Vertical origin.
    Y,
    /// Horizontal extent.
    Width,
    /// Vertical extent.
    Height,
}

/// A [`ClipField`] resolved to the correction that handles it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClipTarget {
    /// Handled by [`correct_position`](crate::correct_position).
    Position(PositionAxis),
    /// Handled by [`correct_size`](crate::correct_size).
    Size(SizeAxis),
}

/// Low edge of a normalized rect (the smaller coordinate).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LowEdge {
    /// Left edge; paired with [`HighEdge::Right`].
    Left,
    /// Top edge; paired with [`HighEdge::Bottom`].
    Top,
}

/// High edge of a normalized rect (the larger coordinate).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HighEdge {
    /// Right edge; paired with [`LowEdge::Left`].
    Right,
    /// Bottom edge; paired with [`LowEdge::Top`].
    Bottom,
}

/// Any edge of a normalized rect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Left edge.
    Left,
    /// Top edge.
    Top,
    /// Right edge.
    Right,
    /// Bottom edge.
    Bottom,
}

/// An [`Edge`] resolved to the correction that handles it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EdgeTarget {
    /// Handled by [`correct_low`](crate::correct_low).
    Low(LowEdge),
    /// Handled by [`correct_high`](crate::correct_high).
    High(HighEdge),
}

/// A field selector with a paired dependent field.
pub trait Paired: Copy {
    /// Selector type of the partner.
    type Partner: Copy;

    /// The field that may move when this one is corrected.
    fn dependent(self) -> Self::Partner;
}

/// The field paired with `axis`.
///
/// Callers use this to find which sibling input to refresh when a
/// correction reports [`DependentChanged`](crate::ChangeResult::DependentChanged).
///
/// ```
/// use rectfix::{ClipField, Edge, PositionAxis, SizeAxis, dependent_axis};
///
/// assert_eq!(dependent_axis(PositionAxis::X), SizeAxis::Width);
/// assert_eq!(dependent_axis(ClipField::Height), ClipField::Y);
/// assert_eq!(dependent_axis(Edge::Left), Edge::Right);
/// ```
pub fn dependent_axis<A: Paired>(axis: A) -> A::Partner {
    axis.dependent()
}

impl Paired for PositionAxis {
    type Partner = SizeAxis;

    fn dependent(self) -> SizeAxis {
        match self {
            Self::X => SizeAxis::Width,
            Self::Y => SizeAxis::Height,
        }
    }
}

impl Paired for SizeAxis {
    type Partner = PositionAxis;

    fn dependent(self) -> PositionAxis {
        match self {
            Self::Width => PositionAxis::X,
            Self::Height => PositionAxis::Y,
        }
    }
}

impl Paired for ClipField {
    type Partner = ClipField;

    fn dependent(self) -> ClipField {
        match self {
            Self::X => Self::Width,
            Self::Y => Self::Height,
            Self::Width => Self::X,
            Self::Height => Self::Y,
        }
    }
}

impl Paired for LowEdge {
    type Partner = HighEdge;

    fn dependent(self) -> HighEdge {
        match self {
            Self::Left => HighEdge::Right,
            Self::Top => HighEdge::Bottom,
        }
    }
}

impl Paired for HighEdge {
    type Partner = LowEdge;

    fn dependent(self) -> LowEdge {
        match self {
            Self::Right => LowEdge::Left,
            Self::Bottom => LowEdge::Top,
        }
    }
}

impl Paired for Edge {
    type Partner = Edge;

    fn dependent(self) -> Edge {
        match self {
            Self::Left => Self::Right,
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
        }
    }
}

impl ClipField {
    /// All four fields in declaration order.
    pub const ALL: [Self; 4] = [Self::X, Self::Y, Self::Width, Self::Height];

    /// Resolve to the narrow selector of the correction that handles this field.
    pub fn split(self) -> ClipTarget {
        match self {
            Self::X => ClipTarget::Position(PositionAxis::X),
            Self::Y => ClipTarget::Position(PositionAxis::Y),
            Self::Width => ClipTarget::Size(SizeAxis::Width),
            Self::Height => ClipTarget::Size(SizeAxis::Height),
        }
    }

    /// Whether this field lies on the horizontal axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::X | Self::Width)
    }
}

impl Edge {
    /// All four edges in declaration order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    /// Resolve to the narrow selector of the correction that handles this edge.
    pub fn split(self) -> EdgeTarget {
        match self {
            Self::Left => EdgeTarget::Low(LowEdge::Left),
            Self::Top => EdgeTarget::Low(LowEdge::Top),
            Self::Right => EdgeTarget::High(HighEdge::Right),
            Self::Bottom => EdgeTarget::High(HighEdge::Bottom),
        }
    }

    /// Whether this edge lies on the horizontal axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl From<PositionAxis> for ClipField {
    fn from(axis: PositionAxis) -> Self {
        match axis {
            PositionAxis::X => Self::X,
            PositionAxis::Y => Self::Y,
        }
    }
}

impl From<SizeAxis> for ClipField {
    fn from(axis: SizeAxis) -> Self {
        match axis {
            SizeAxis::Width => Self::Width,
            SizeAxis::Height => Self::Height,
        }
    }
}

impl From<LowEdge> for Edge {
    fn from(edge: LowEdge) -> Self {
        match edge {
            LowEdge::Left => Self::Left,
            LowEdge::Top => Self::Top,
        }
    }
}

impl From<HighEdge> for Edge {
    fn from(edge: HighEdge) -> Self {
        match edge {
            HighEdge::Right => Self::Right,
            HighEdge::Bottom => Self::Bottom,
        }
    }
}
