//! Rectangle input correction: take an edit to one field of a rect and
//! return the nearest rect that stays inside its bound and above a minimum size.
//!
//! Pure arithmetic — no allocation, no state, `no_std` compatible.
//!
//! # Modules
//!
//! - [`absolute`] — Pixel rects ([`IntRect`]) clipped to a bounding rect
//! - [`relative`] — Normalized rects ([`NormRect`]) inside `0.0..=1.0`
//! - [`axis`] — Field selectors and the target/dependent pairing
//! - [`change`] — [`ChangeResult`] flags reporting what was corrected
//! - [`rect`] — The rect value types
//!
//! # Example
//!
//! ```
//! use rectfix::{ClipField, IntRect, correct_clip_field, dependent_axis};
//!
//! let window = IntRect::new(0, 0, 640, 360);
//! let clip = IntRect::new(100, 50, 200, 100);
//!
//! let fixed = correct_clip_field(clip, ClipField::Width, 600, window, 0);
//! assert_eq!(fixed.rect, IntRect::new(40, 50, 600, 100));
//! if fixed.change.dependent_changed() {
//!     // Refresh the X input as well as Width.
//!     assert_eq!(dependent_axis(ClipField::Width), ClipField::X);
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod absolute;
pub mod axis;
pub mod change;
pub mod rect;
pub mod relative;

pub use absolute::{
    correct_clip_field, correct_height, correct_position, correct_size, correct_width, correct_x,
    correct_y,
};
pub use axis::{
    ClipField, ClipTarget, Edge, EdgeTarget, HighEdge, LowEdge, Paired, PositionAxis, SizeAxis,
    dependent_axis,
};
pub use change::{ChangeResult, Corrected};
pub use rect::{IntRect, NormRect};
pub use relative::{
    MIN_RELATIVE_SIZE, correct_bottom, correct_high, correct_left, correct_low,
    correct_relative_edge, correct_right, correct_top,
};
