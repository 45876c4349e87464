//! Rectangle value types: absolute pixel rects and normalized layout rects.

use crate::axis::{ClipField, Edge};
use crate::relative::EXTENT_SLACK;

/// Axis-aligned rectangle in pixel coordinates.
///
/// Origin may be negative (multi-monitor desktops place windows left of or
/// above the primary screen). Width and height are non-negative after any
/// correction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntRect {
    /// Left column.
    pub x: i32,
    /// Top row.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl IntRect {
    /// Create a new rect.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the last column: `x + width`.
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// One past the last row: `y + height`.
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Value of a single field.
    pub fn get(&self, field: ClipField) -> i32 {
        match field {
            ClipField::X => self.x,
            ClipField::Y => self.y,
            ClipField::Width => self.width,
            ClipField::Height => self.height,
        }
    }

    /// Copy with a single field replaced.
    pub fn with(mut self, field: ClipField, value: i32) -> Self {
        match field {
            ClipField::X => self.x = value,
            ClipField::Y => self.y = value,
            ClipField::Width => self.width = value,
            ClipField::Height => self.height = value,
        }
        self
    }

    /// Whether `inner` lies fully inside this rect (edges may touch).
    pub fn contains_rect(&self, inner: &IntRect) -> bool {
        inner.width >= 0
            && inner.height >= 0
            && inner.x >= self.x
            && inner.y >= self.y
            && inner.right() <= self.right()
            && inner.bottom() <= self.bottom()
    }
}

/// Rectangle in normalized coordinates, each edge in `0.0..=1.0`.
///
/// Describes a placement relative to an outer area: `{0, 0, 1, 1}` covers
/// all of it, `{0.5, 0, 1, 0.5}` is the top-right quadrant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NormRect {
    /// Left edge, `0.0` at the outer left.
    pub left: f64,
    /// Top edge, `0.0` at the outer top.
    pub top: f64,
    /// Right edge, `1.0` at the outer right.
    pub right: f64,
    /// Bottom edge, `1.0` at the outer bottom.
    pub bottom: f64,
}

impl Default for NormRect {
    fn default() -> Self {
        Self::FULL
    }
}

impl NormRect {
    /// The whole outer area.
    pub const FULL: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Create a new rect from its four edges.
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal extent, `right - left`.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent, `bottom - top`.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Value of a single edge.
    pub fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Left => self.left,
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
        }
    }

    /// Copy with a single edge replaced.
    pub fn with(mut self, edge: Edge, value: f64) -> Self {
        match edge {
            Edge::Left => self.left = value,
            Edge::Top => self.top = value,
            Edge::Right => self.right = value,
            Edge::Bottom => self.bottom = value,
        }
        self
    }

    /// Whether every edge is in range and each extent is at least `min_size`,
    /// allowing the rounding slack the corrections leave behind.
    pub fn is_valid(&self, min_size: f64) -> bool {
        0.0 <= self.left
            && self.width() >= min_size - EXTENT_SLACK
            && self.right <= 1.0
            && 0.0 <= self.top
            && self.height() >= min_size - EXTENT_SLACK
            && self.bottom <= 1.0
    }

    /// Resolve to pixel coordinates inside `bound`.
    ///
    /// Edges are clamped to `0.0..=1.0` and rounded independently, so two
    /// rects sharing an edge map to pixel rects sharing a column or row.
    /// The origin saturates at `i32::MAX` when `bound.right()` or
    /// `bound.bottom()` does not fit in `i32`.
    ///
    /// ```
    /// use rectfix::{IntRect, NormRect};
    ///
    /// let bound = IntRect::new(0, 0, 640, 360);
    /// let half = NormRect::new(0.5, 0.0, 1.0, 0.5);
    /// assert_eq!(half.to_pixels(bound), IntRect::new(320, 0, 320, 180));
    /// ```
    pub fn to_pixels(&self, bound: IntRect) -> IntRect {
        let bw = bound.width.max(0) as f64;
        let bh = bound.height.max(0) as f64;
        let left = scale_edge(self.left, bw);
        let right = scale_edge(self.right, bw).max(left);
        let top = scale_edge(self.top, bh);
        let bottom = scale_edge(self.bottom, bh).max(top);
        IntRect {
            x: saturate(bound.x as i64 + left),
            y: saturate(bound.y as i64 + top),
            width: saturate(right - left),
            height: saturate(bottom - top),
        }
    }
}

/// Narrow to `i32`, clamping instead of wrapping.
pub(crate) fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Map a normalized coordinate onto `0..=extent` pixels.
fn scale_edge(value: f64, extent: f64) -> i64 {
    num_traits::Float::round(value.clamp(0.0, 1.0) * extent) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_bottom_do_not_overflow() {
        let r = IntRect::new(i32::MAX, i32::MAX, i32::MAX, 1);
        assert_eq!(r.right(), i32::MAX as i64 * 2);
        assert_eq!(r.bottom(), i32::MAX as i64 + 1);
    }

    #[test]
    fn get_with_fields() {
        let r = IntRect::new(1, 2, 3, 4);
        assert_eq!(r.get(ClipField::X), 1);
        assert_eq!(r.get(ClipField::Y), 2);
        assert_eq!(r.get(ClipField::Width), 3);
        assert_eq!(r.get(ClipField::Height), 4);
        assert_eq!(r.with(ClipField::Width, 9), IntRect::new(1, 2, 9, 4));
        assert_eq!(r.with(ClipField::Y, -5), IntRect::new(1, -5, 3, 4));
    }

    #[test]
    fn get_with_edges() {
        let r = NormRect::new(0.1, 0.2, 0.3, 0.4);
        for e in Edge::ALL {
            assert_eq!(r.with(e, 0.75).get(e), 0.75);
        }
        assert_eq!(r.get(Edge::Bottom), 0.4);
    }

    #[test]
    fn contains_rect() {
        let bound = IntRect::new(-100, 0, 200, 100);
        assert!(bound.contains_rect(&bound));
        assert!(bound.contains_rect(&IntRect::new(-100, 0, 0, 0)));
        assert!(bound.contains_rect(&IntRect::new(100, 100, 0, 0)));
        assert!(!bound.contains_rect(&IntRect::new(-101, 0, 10, 10)));
        assert!(!bound.contains_rect(&IntRect::new(50, 50, 51, 10)));
        assert!(!bound.contains_rect(&IntRect::new(0, 0, -1, 10)));
    }

    #[test]
    fn norm_extents() {
        let r = NormRect::new(0.25, 0.5, 0.75, 1.0);
        assert_eq!(r.width(), 0.5);
        assert_eq!(r.height(), 0.5);
        assert!(r.is_valid(0.5));
        assert!(!r.is_valid(0.625));
        assert!(NormRect::default().is_valid(1.0));
        assert!(!NormRect::new(-0.25, 0.0, 0.5, 0.5).is_valid(0.0));
        assert!(!NormRect::new(0.0, 0.0, 0.5, 1.25).is_valid(0.0));
    }

    #[test]
    fn to_pixels_full_and_offset_bound() {
        let bound = IntRect::new(-1920, 40, 1920, 1080);
        assert_eq!(NormRect::FULL.to_pixels(bound), bound);
        assert_eq!(
            NormRect::new(0.25, 0.5, 0.75, 1.0).to_pixels(bound),
            IntRect::new(-1920 + 480, 40 + 540, 960, 540)
        );
    }

    #[test]
    fn to_pixels_shared_edges_tile() {
        // Three equal columns of a 100px bound: rounding each edge keeps them adjacent.
        let bound = IntRect::new(0, 0, 100, 10);
        let third = 1.0 / 3.0;
        let a = NormRect::new(0.0, 0.0, third, 1.0).to_pixels(bound);
        let b = NormRect::new(third, 0.0, 2.0 * third, 1.0).to_pixels(bound);
        let c = NormRect::new(2.0 * third, 0.0, 1.0, 1.0).to_pixels(bound);
        assert_eq!(a.right(), b.x as i64);
        assert_eq!(b.right(), c.x as i64);
        assert_eq!(c.right(), 100);
        assert_eq!(a.width + b.width + c.width, 100);
    }

    #[test]
    fn to_pixels_saturates_past_i32_max() {
        let bound = IntRect::new(i32::MAX - 10, 0, 100, 10);
        let r = NormRect::new(0.5, 0.0, 1.0, 1.0).to_pixels(bound);
        assert_eq!(r, IntRect::new(i32::MAX, 0, 50, 10));
        assert_eq!(saturate(i64::MIN), i32::MIN);
    }

    #[test]
    fn is_valid_accepts_rounded_extents() {
        // 0.03 - 0.02 is just under 0.01.
        assert!(NormRect::new(0.02, 0.0, 0.03, 1.0).is_valid(0.01));
        assert!(!NormRect::new(0.02, 0.0, 0.029, 1.0).is_valid(0.01));
    }

    #[test]
    fn to_pixels_clamps_out_of_range_edges() {
        let bound = IntRect::new(0, 0, 200, 100);
        assert_eq!(
            NormRect::new(-0.5, -1.0, 1.5, 2.0).to_pixels(bound),
            bound
        );
        // Inverted edges collapse to zero size rather than going negative.
        let r = NormRect::new(0.75, 0.5, 0.25, 0.25).to_pixels(bound);
        assert_eq!(r, IntRect::new(150, 50, 0, 0));
    }
}
