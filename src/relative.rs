//! Correction of normalized layout rects.
//!
//! Same idea as [`absolute`](crate::absolute), but the bound is fixed at
//! `0.0..=1.0` and the rect is stored as edges rather than origin + size.
//! The caller edits one edge; the opposite edge on the same axis is the
//! dependent field and moves to keep `high - low >= min_size`.
//!
//! Preconditions: `0.0 <= min_size <= 1.0` and no NaN inputs.
//!
//! # Example
//!
//! ```
//! use rectfix::{ChangeResult, HighEdge, LowEdge, NormRect, correct_high, correct_low};
//!
//! let placement = NormRect::new(0.25, 0.125, 0.5, 0.5);
//!
//! // Moving Left close to Right pushes Right along.
//! let fixed = correct_low(placement, LowEdge::Left, 0.4375, 0.125);
//! assert_eq!(fixed.rect, NormRect::new(0.4375, 0.125, 0.5625, 0.5));
//! assert_eq!(fixed.change, ChangeResult::DependentChanged);
//!
//! // Moving Right below the minimum drags Left down to zero.
//! let fixed = correct_high(placement, HighEdge::Right, 0.0625, 0.125);
//! assert_eq!(fixed.rect, NormRect::new(0.0, 0.125, 0.125, 0.5));
//! assert_eq!(fixed.change, ChangeResult::BothChanged);
//! ```

use crate::axis::{Edge, EdgeTarget, HighEdge, LowEdge};
use crate::change::{ChangeResult, Corrected};
use crate::rect::NormRect;

/// Smallest extent a normalized rect may have on either axis.
///
/// Used by [`correct_relative_edge`]; the per-edge functions take the
/// minimum explicitly.
pub const MIN_RELATIVE_SIZE: f64 = 0.01;

/// Correct an edit to the left or top edge of `original`.
///
/// The edited edge is clamped to `0.0..=1.0 - min_size`; the opposite edge
/// is clamped into range and pushed out if it is closer than `min_size`.
pub fn correct_low(
    original: NormRect,
    edge: LowEdge,
    value: f64,
    min_size: f64,
) -> Corrected<NormRect> {
    match edge {
        LowEdge::Left => correct_left(original, value, min_size),
        LowEdge::Top => correct_top(original, value, min_size),
    }
}

/// Correct an edit to the right or bottom edge of `original`.
///
/// The edited edge is clamped to `min_size..=1.0`; the opposite edge is
/// clamped into range and pulled back if it is closer than `min_size`.
pub fn correct_high(
    original: NormRect,
    edge: HighEdge,
    value: f64,
    min_size: f64,
) -> Corrected<NormRect> {
    match edge {
        HighEdge::Right => correct_right(original, value, min_size),
        HighEdge::Bottom => correct_bottom(original, value, min_size),
    }
}

/// Correct an edit to any edge, dispatching to [`correct_low`] or
/// [`correct_high`].
pub fn correct_relative_edge(
    original: NormRect,
    edge: Edge,
    value: f64,
    min_size: f64,
) -> Corrected<NormRect> {
    match edge.split() {
        EdgeTarget::Low(edge) => correct_low(original, edge, value, min_size),
        EdgeTarget::High(edge) => correct_high(original, edge, value, min_size),
    }
}

/// Correct an edit to `left`. Top and bottom are copied unchanged.
pub fn correct_left(original: NormRect, value: f64, min_size: f64) -> Corrected<NormRect> {
    let (low, high, change) = correct_low_1d(value, original.right, min_size);
    Corrected {
        rect: NormRect {
            left: low,
            right: high,
            ..original
        },
        change,
    }
}

/// Correct an edit to `top`. Left and right are copied unchanged.
pub fn correct_top(original: NormRect, value: f64, min_size: f64) -> Corrected<NormRect> {
    let (low, high, change) = correct_low_1d(value, original.bottom, min_size);
    Corrected {
        rect: NormRect {
            top: low,
            bottom: high,
            ..original
        },
        change,
    }
}

/// Correct an edit to `right`. Top and bottom are copied unchanged.
pub fn correct_right(original: NormRect, value: f64, min_size: f64) -> Corrected<NormRect> {
    let (low, high, change) = correct_high_1d(original.left, value, min_size);
    Corrected {
        rect: NormRect {
            left: low,
            right: high,
            ..original
        },
        change,
    }
}

/// Correct an edit to `bottom`. Left and right are copied unchanged.
pub fn correct_bottom(original: NormRect, value: f64, min_size: f64) -> Corrected<NormRect> {
    let (low, high, change) = correct_high_1d(original.top, value, min_size);
    Corrected {
        rect: NormRect {
            top: low,
            bottom: high,
            ..original
        },
        change,
    }
}

// ============================================================================
// One-dimensional kernels
// ============================================================================

/// Rounding noise tolerated when comparing an extent against `min_size`.
///
/// `low + min_size - low` is not exactly `min_size` for most decimal inputs;
/// a gap within this slack counts as satisfying the minimum, so a rect this
/// module produced is accepted unchanged when fed back in.
pub(crate) const EXTENT_SLACK: f64 = 4.0 * f64::EPSILON;

/// Whether `high - low` falls short of `min_size` by more than rounding noise.
fn too_narrow(low: f64, high: f64, min_size: f64) -> bool {
    high - low < min_size - EXTENT_SLACK
}

/// Low edge is the target, high edge the dependent.
fn correct_low_1d(value: f64, high: f64, min_size: f64) -> (f64, f64, ChangeResult) {
    let mut low = value;
    let mut high = high;
    let mut change = ChangeResult::None;

    if high < min_size {
        high = min_size;
        change |= ChangeResult::DependentChanged;
    } else if 1.0 < high {
        high = 1.0;
        change |= ChangeResult::DependentChanged;
    }

    if low < 0.0 {
        low = 0.0;
        change |= ChangeResult::TargetChanged;
    } else if 1.0 - min_size < low {
        low = 1.0 - min_size;
        change |= ChangeResult::TargetChanged;
    }

    // Low wins: push high out.
    if too_narrow(low, high, min_size) {
        high = (low + min_size).min(1.0);
        change |= ChangeResult::DependentChanged;
    }

    debug_assert_post(low, high, min_size);
    (low, high, change)
}

/// High edge is the target, low edge the dependent.
fn correct_high_1d(low: f64, value: f64, min_size: f64) -> (f64, f64, ChangeResult) {
    let mut low = low;
    let mut high = value;
    let mut change = ChangeResult::None;

    if low < 0.0 {
        low = 0.0;
        change |= ChangeResult::DependentChanged;
    } else if 1.0 - min_size < low {
        low = 1.0 - min_size;
        change |= ChangeResult::DependentChanged;
    }

    if high < min_size {
        high = min_size;
        change |= ChangeResult::TargetChanged;
    } else if 1.0 < high {
        high = 1.0;
        change |= ChangeResult::TargetChanged;
    }

    // High wins: pull low back.
    if too_narrow(low, high, min_size) {
        low = (high - min_size).max(0.0);
        change |= ChangeResult::DependentChanged;
    }

    debug_assert_post(low, high, min_size);
    (low, high, change)
}

fn debug_assert_post(low: f64, high: f64, min_size: f64) {
    debug_assert!(
        !(0.0..=1.0).contains(&min_size)
            || (0.0 <= low && !too_narrow(low, high, min_size) && high <= 1.0),
        "relative correction out of range: {low}..{high} (min {min_size})"
    );
}
