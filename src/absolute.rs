//! Correction of absolute pixel rects against a bounding rect.
//!
//! The caller edits one field of an [`IntRect`] (typically a clipping region
//! inside a captured window) and gets back the nearest rect that lies fully
//! inside `bound` with each extent at least `min_size`. The one exception:
//! a position placed less than `min_size` before the far edge is kept, and
//! the size shrinks to whatever room is left.
//!
//! Position edits and size edits resolve overflow differently. Whichever
//! field the user is editing is kept where possible:
//!
//! ```text
//!     edit X past the right edge      edit Width past the right edge
//!     ┌──────────── bound ──┐         ┌──────────── bound ──┐
//!     │          X ├────────┼──┤      │        ├────────────┼──┤
//!     │          X ├────────┤  │      │     ├──────────────┤  │
//!     └─────────────────────┘         └─────────────────────┘
//!       width shrinks                   x moves left
//! ```
//!
//! Preconditions: `0 <= min_size <= bound extent` on the edited axis, and
//! `bound.right()`/`bound.bottom()` fit in `i32`. Outside them the result is
//! still produced but may not satisfy the bound.
//!
//! # Example
//!
//! ```
//! use rectfix::{ChangeResult, IntRect, PositionAxis, SizeAxis, correct_position, correct_size};
//!
//! let bound = IntRect::new(0, 0, 640, 360);
//! let clip = IntRect::new(100, 50, 200, 100);
//!
//! // Dragging X past the window collapses the rect against the right edge.
//! let fixed = correct_position(clip, PositionAxis::X, 700, bound, 0);
//! assert_eq!(fixed.rect, IntRect::new(640, 50, 0, 100));
//! assert_eq!(fixed.change, ChangeResult::BothChanged);
//!
//! // Asking for a width larger than the window fits it.
//! let fixed = correct_size(clip, SizeAxis::Width, 800, bound, 0);
//! assert_eq!(fixed.rect, IntRect::new(0, 50, 640, 100));
//! assert_eq!(fixed.change, ChangeResult::BothChanged);
//! ```

use crate::axis::{ClipField, ClipTarget, PositionAxis, SizeAxis};
use crate::change::{ChangeResult, Corrected};
use crate::rect::{IntRect, saturate};

/// Correct an edit to the X or Y of `original`.
///
/// Position is trusted over size: if the rect overflows the far edge of
/// `bound`, the size shrinks.
pub fn correct_position(
    original: IntRect,
    axis: PositionAxis,
    value: i32,
    bound: IntRect,
    min_size: i32,
) -> Corrected<IntRect> {
    match axis {
        PositionAxis::X => correct_x(original, value, bound, min_size),
        PositionAxis::Y => correct_y(original, value, bound, min_size),
    }
}

/// Correct an edit to the width or height of `original`.
///
/// Size is trusted over position: if the rect overflows the far edge of
/// `bound`, the position moves back.
pub fn correct_size(
    original: IntRect,
    axis: SizeAxis,
    value: i32,
    bound: IntRect,
    min_size: i32,
) -> Corrected<IntRect> {
    match axis {
        SizeAxis::Width => correct_width(original, value, bound, min_size),
        SizeAxis::Height => correct_height(original, value, bound, min_size),
    }
}

/// Correct an edit to any field, dispatching to [`correct_position`] or
/// [`correct_size`].
pub fn correct_clip_field(
    original: IntRect,
    field: ClipField,
    value: i32,
    bound: IntRect,
    min_size: i32,
) -> Corrected<IntRect> {
    match field.split() {
        ClipTarget::Position(axis) => correct_position(original, axis, value, bound, min_size),
        ClipTarget::Size(axis) => correct_size(original, axis, value, bound, min_size),
    }
}

/// Correct an edit to `x`. Y and height are copied unchanged.
pub fn correct_x(
    original: IntRect,
    value: i32,
    bound: IntRect,
    min_size: i32,
) -> Corrected<IntRect> {
    let limits = Limits::new(bound.x, bound.width, min_size);
    let (span, change) = correct_position_1d(value as i64, original.width as i64, &limits);
    Corrected {
        rect: IntRect {
            x: span.position(),
            width: span.size(),
            ..original
        },
        change,
    }
}

/// Correct an edit to `y`. X and width are copied unchanged.
pub fn correct_y(
    original: IntRect,
    value: i32,
    bound: IntRect,
    min_size: i32,
) -> Corrected<IntRect> {
    let limits = Limits::new(bound.y, bound.height, min_size);
    let (span, change) = correct_position_1d(value as i64, original.height as i64, &limits);
    Corrected {
        rect: IntRect {
            y: span.position(),
            height: span.size(),
            ..original
        },
        change,
    }
}

/// Correct an edit to `width`. Y and height are copied unchanged.
pub fn correct_width(
    original: IntRect,
    value: i32,
    bound: IntRect,
    min_size: i32,
) -> Corrected<IntRect> {
    let limits = Limits::new(bound.x, bound.width, min_size);
    let (span, change) = correct_size_1d(original.x as i64, value as i64, &limits);
    Corrected {
        rect: IntRect {
            x: span.position(),
            width: span.size(),
            ..original
        },
        change,
    }
}

/// Correct an edit to `height`. X and width are copied unchanged.
pub fn correct_height(
    original: IntRect,
    value: i32,
    bound: IntRect,
    min_size: i32,
) -> Corrected<IntRect> {
    let limits = Limits::new(bound.y, bound.height, min_size);
    let (span, change) = correct_size_1d(original.y as i64, value as i64, &limits);
    Corrected {
        rect: IntRect {
            y: span.position(),
            height: span.size(),
            ..original
        },
        change,
    }
}

// ============================================================================
// One-dimensional kernels
// ============================================================================

/// Bound along one axis, widened to i64 so `position + size` cannot overflow.
struct Limits {
    low: i64,
    high: i64,
    extent: i64,
    min_size: i64,
}

impl Limits {
    fn new(origin: i32, extent: i32, min_size: i32) -> Self {
        let low = origin as i64;
        let extent = extent as i64;
        Self {
            low,
            high: low + extent,
            extent,
            min_size: min_size as i64,
        }
    }

    /// Whether the documented preconditions hold, so the post-condition can be asserted.
    fn satisfiable(&self) -> bool {
        0 <= self.min_size && self.min_size <= self.extent
    }
}

/// Position and size along one axis.
struct Span {
    position: i64,
    size: i64,
}

impl Span {
    fn position(&self) -> i32 {
        saturate(self.position)
    }

    fn size(&self) -> i32 {
        saturate(self.size)
    }
}

/// Position edit: keep size if the rect only slid off the near edge, collapse
/// to `min_size` against the far edge if it was pushed past it, then trim
/// size to fit.
fn correct_position_1d(value: i64, size: i64, limits: &Limits) -> (Span, ChangeResult) {
    let mut position = value;
    let mut size = size;
    let mut change = ChangeResult::None;

    if position < limits.low {
        position = limits.low;
        change |= ChangeResult::TargetChanged;
    } else if limits.high < position {
        position = limits.high - limits.min_size;
        size = limits.min_size;
        change |= ChangeResult::BothChanged;
    }

    if size < limits.min_size {
        size = limits.min_size;
        change |= ChangeResult::DependentChanged;
    }

    // Position wins: shrink size to fit.
    if limits.high < position + size {
        size = limits.high - position;
        change |= ChangeResult::DependentChanged;
    }

    debug_assert!(
        !limits.satisfiable() || (limits.low <= position && position + size <= limits.high),
        "position correction left bound: {position}+{size} outside {}..{}",
        limits.low,
        limits.high
    );
    (Span { position, size }, change)
}

/// Size edit: clamp size to `min_size..=extent` (fitting the whole bound when
/// too large), pull position inside, then move position back so the size fits.
fn correct_size_1d(position: i64, value: i64, limits: &Limits) -> (Span, ChangeResult) {
    let mut position = position;
    let mut size = value;
    let mut change = ChangeResult::None;

    if size < limits.min_size {
        size = limits.min_size;
        change |= ChangeResult::TargetChanged;
    } else if limits.extent < size {
        position = limits.low;
        size = limits.extent;
        change |= ChangeResult::BothChanged;
    }

    if position < limits.low {
        position = limits.low;
        change |= ChangeResult::DependentChanged;
    } else if limits.high < position {
        position = limits.high - limits.min_size;
        size = limits.min_size;
        change |= ChangeResult::BothChanged;
    }

    // Size wins: move position back to fit.
    if limits.high < position + size {
        position = limits.high - size;
        change |= ChangeResult::DependentChanged;
    }

    debug_assert!(
        !limits.satisfiable() || (limits.low <= position && position + size <= limits.high),
        "size correction left bound: {position}+{size} outside {}..{}",
        limits.low,
        limits.high
    );
    (Span { position, size }, change)
}
