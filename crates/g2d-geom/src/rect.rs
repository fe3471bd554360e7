//! Axis-aligned rectangle type for coordinate mapping.
//!
//! [`Rect`] stores four double-precision edges (left, top, right,
//! bottom). Containment treats the box as half-open:
//! `[left, right) x [top, bottom)`.
//!
//! # Storage is not normalized
//!
//! A rectangle with `left > right` or `top > bottom` is a legal storage
//! state — edges computed independently may cross. `width`/`height` can
//! therefore be negative, and [`Rect::is_empty`] reports `true` for any
//! flipped or zero-area box. Call [`Rect::sort`] to swap crossed edges.
//!
//! # Usage
//!
//! ```rust
//! use g2d_geom::Rect;
//!
//! let mut r = Rect::new(100.0, 100.0, 200.0, 200.0);
//! assert!(r.contains(100.0, 100.0));   // left/top edges included
//! assert!(!r.contains(200.0, 200.0));  // right/bottom excluded
//!
//! assert!(r.intersect_ltrb(50.0, 50.0, 150.0, 150.0));
//! assert_eq!(r, Rect::new(100.0, 100.0, 150.0, 150.0));
//! ```

use crate::Point;

/// An axis-aligned rectangle with double-precision edges.
///
/// Edges are independent fields; no invariant forces `left <= right` or
/// `top <= bottom`. Operations that care about orientation document it.
///
/// # Example
///
/// ```rust
/// use g2d_geom::Rect;
///
/// let r = Rect::new(10.0, 20.0, 110.0, 70.0);
/// assert_eq!(r.width(), 100.0);
/// assert_eq!(r.height(), 50.0);
/// assert_eq!(r.center_x(), 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rect {
    /// X coordinate of the left edge
    pub left: f64,
    /// Y coordinate of the top edge
    pub top: f64,
    /// X coordinate of the right edge
    pub right: f64,
    /// Y coordinate of the bottom edge
    pub bottom: f64,
}

impl Rect {
    /// Creates a rectangle from its four edges. No validation is
    /// performed; the caller may pass crossed edges.
    #[inline]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns `true` if the rectangle is empty
    /// (`left >= right` or `top >= bottom`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// The rectangle's width (`right - left`).
    ///
    /// Not validated; negative for a flipped rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// The rectangle's height (`bottom - top`).
    ///
    /// Not validated; negative for a flipped rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// The horizontal midpoint.
    #[inline]
    pub fn center_x(&self) -> f64 {
        (self.left + self.right) * 0.5
    }

    /// The vertical midpoint.
    #[inline]
    pub fn center_y(&self) -> f64 {
        (self.top + self.bottom) * 0.5
    }

    /// The center point.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// Collapses the rectangle to (0, 0, 0, 0).
    #[inline]
    pub fn set_empty(&mut self) {
        self.left = 0.0;
        self.top = 0.0;
        self.right = 0.0;
        self.bottom = 0.0;
    }

    /// Sets all four edges. No range checking is performed; keeping
    /// `left <= right` and `top <= bottom` is up to the caller.
    #[inline]
    pub fn set(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        self.left = left;
        self.top = top;
        self.right = right;
        self.bottom = bottom;
    }

    /// Copies the edges of another rectangle into this one.
    #[inline]
    pub fn set_rect(&mut self, src: &Rect) {
        *self = *src;
    }

    /// Translates the rectangle by adding dx to left/right and dy to
    /// top/bottom.
    #[inline]
    pub fn offset(&mut self, dx: f64, dy: f64) {
        self.left += dx;
        self.top += dy;
        self.right += dx;
        self.bottom += dy;
    }

    /// Adds a distinct delta to each edge independently.
    #[inline]
    pub fn offset_edges(&mut self, dl: f64, dt: f64, dr: f64, db: f64) {
        self.left += dl;
        self.top += dt;
        self.right += dr;
        self.bottom += db;
    }

    /// Moves the rectangle to a new (left, top) position, preserving
    /// width and height.
    ///
    /// # Example
    ///
    /// ```rust
    /// use g2d_geom::Rect;
    ///
    /// let mut r = Rect::new(10.0, 10.0, 30.0, 50.0);
    /// r.offset_to(0.0, 100.0);
    /// assert_eq!(r, Rect::new(0.0, 100.0, 20.0, 140.0));
    /// ```
    #[inline]
    pub fn offset_to(&mut self, new_left: f64, new_top: f64) {
        self.right += new_left - self.left;
        self.bottom += new_top - self.top;
        self.left = new_left;
        self.top = new_top;
    }

    /// Insets the rectangle by (dx, dy): positive values move each side
    /// inwards, negative values move them outwards.
    #[inline]
    pub fn inset(&mut self, dx: f64, dy: f64) {
        self.left += dx;
        self.top += dy;
        self.right -= dx;
        self.bottom -= dy;
    }

    /// Returns `true` if (x, y) is inside the rectangle.
    ///
    /// Left and top are inside, right and bottom are not:
    /// `left <= x < right && top <= y < bottom`. An empty rectangle
    /// contains no point.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.left < self.right
            && self.top < self.bottom
            && x >= self.left
            && x < self.right
            && y >= self.top
            && y < self.bottom
    }

    /// Returns `true` if the rectangle with the given edges is inside
    /// or equal to this rectangle. An empty rectangle never contains
    /// another rectangle.
    #[inline]
    pub fn contains_ltrb(&self, left: f64, top: f64, right: f64, bottom: f64) -> bool {
        self.left < self.right
            && self.top < self.bottom
            && self.left <= left
            && self.top <= top
            && self.right >= right
            && self.bottom >= bottom
    }

    /// Returns `true` if this rectangle is a superset of `r` (edges may
    /// coincide). An empty rectangle never contains another rectangle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use g2d_geom::Rect;
    ///
    /// let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    /// assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 60.0, 60.0)));
    /// assert!(outer.contains_rect(&outer));
    /// assert!(!outer.contains_rect(&Rect::new(-1.0, 0.0, 50.0, 50.0)));
    /// ```
    #[inline]
    pub fn contains_rect(&self, r: &Rect) -> bool {
        self.contains_ltrb(r.left, r.top, r.right, r.bottom)
    }

    /// Intersects this rectangle with the edges (left, top, right,
    /// bottom). On strict overlap, sets this rectangle to the overlap
    /// region and returns `true`; otherwise returns `false` and leaves
    /// this rectangle unchanged.
    ///
    /// No emptiness check is performed on either rectangle. To test
    /// without mutating, use [`Rect::intersects`].
    pub fn intersect_ltrb(&mut self, left: f64, top: f64, right: f64, bottom: f64) -> bool {
        if self.left < right && left < self.right && self.top < bottom && top < self.bottom {
            if self.left < left {
                self.left = left;
            }
            if self.top < top {
                self.top = top;
            }
            if self.right > right {
                self.right = right;
            }
            if self.bottom > bottom {
                self.bottom = bottom;
            }
            return true;
        }
        false
    }

    /// Intersects this rectangle with `r`; see [`Rect::intersect_ltrb`].
    #[inline]
    pub fn intersect(&mut self, r: &Rect) -> bool {
        self.intersect_ltrb(r.left, r.top, r.right, r.bottom)
    }

    /// Sets this rectangle to the intersection of `a` and `b` if they
    /// strictly overlap, returning `true`. Otherwise returns `false`
    /// and leaves this rectangle unchanged.
    pub fn set_intersect(&mut self, a: &Rect, b: &Rect) -> bool {
        if a.left < b.right && b.left < a.right && a.top < b.bottom && b.top < a.bottom {
            self.left = a.left.max(b.left);
            self.top = a.top.max(b.top);
            self.right = a.right.min(b.right);
            self.bottom = a.bottom.min(b.bottom);
            return true;
        }
        false
    }

    /// Returns `true` if this rectangle strictly overlaps `r`. Neither
    /// rectangle is modified, and neither is required to be individually
    /// non-empty (unlike [`Rect::contains_rect`]).
    #[inline]
    pub fn intersects(&self, r: &Rect) -> bool {
        Self::rects_intersect(self, r)
    }

    /// Strict overlap test between two rectangles:
    /// `a.left < b.right && b.left < a.right && a.top < b.bottom && b.top < a.bottom`.
    #[inline]
    pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
        a.left < b.right && b.left < a.right && a.top < b.bottom && b.top < a.bottom
    }

    /// Grows this rectangle to enclose the rectangle (left, top, right,
    /// bottom). If the incoming rectangle is empty, nothing happens. If
    /// this rectangle is empty, it is replaced by the incoming one.
    pub fn union_ltrb(&mut self, left: f64, top: f64, right: f64, bottom: f64) {
        if left < right && top < bottom {
            if self.left < self.right && self.top < self.bottom {
                if self.left > left {
                    self.left = left;
                }
                if self.top > top {
                    self.top = top;
                }
                if self.right < right {
                    self.right = right;
                }
                if self.bottom < bottom {
                    self.bottom = bottom;
                }
            } else {
                self.left = left;
                self.top = top;
                self.right = right;
                self.bottom = bottom;
            }
        }
    }

    /// Grows this rectangle to enclose `r`; see [`Rect::union_ltrb`].
    #[inline]
    pub fn union(&mut self, r: &Rect) {
        self.union_ltrb(r.left, r.top, r.right, r.bottom);
    }

    /// Grows this rectangle to include the point (x, y).
    ///
    /// Each axis widens only when the coordinate falls strictly outside
    /// the current edge pair: `x < left` moves left, *else* `x > right`
    /// moves right (never both), and likewise for y. The rectangle is
    /// assumed to be sorted already; an inverted edge pair is not
    /// repaired, and a point between the edges changes nothing. This
    /// mirrors the historical one-sided behavior and is intentionally
    /// not a min/max against both edges.
    pub fn union_point(&mut self, x: f64, y: f64) {
        if x < self.left {
            self.left = x;
        } else if x > self.right {
            self.right = x;
        }

        if y < self.top {
            self.top = y;
        } else if y > self.bottom {
            self.bottom = y;
        }
    }

    /// Swaps left/right if crossed, and top/bottom if crossed. Useful
    /// when the edges were computed separately and may have crossed
    /// over each other.
    ///
    /// # Example
    ///
    /// ```rust
    /// use g2d_geom::Rect;
    ///
    /// let mut r = Rect::new(109.2, 411.1, 21.4, 221.9);
    /// assert!(r.is_empty());
    /// r.sort();
    /// assert_eq!(r, Rect::new(21.4, 221.9, 109.2, 411.1));
    /// ```
    pub fn sort(&mut self) {
        if self.left > self.right {
            std::mem::swap(&mut self.left, &mut self.right);
        }
        if self.top > self.bottom {
            std::mem::swap(&mut self.top, &mut self.bottom);
        }
    }

    /// Multiplies all four edges by `factor` (no-op when `factor` is
    /// exactly 1.0). This scales absolute coordinates, so both the
    /// position and the size of the rectangle change.
    pub fn scale(&mut self, factor: f64) {
        if factor != 1.0 {
            self.left *= factor;
            self.top *= factor;
            self.right *= factor;
            self.bottom *= factor;
        }
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(Rect::default().is_empty());
        assert!(Rect::new(0.0, 0.0, 10.0, 0.0).is_empty());
        assert!(Rect::new(10.0, 0.0, 0.0, 10.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());

        let mut r = Rect::new(1.0, 2.0, 3.0, 4.0);
        r.set_empty();
        assert_eq!(r, Rect::default());
    }

    #[test]
    fn test_dimensions() {
        let r = Rect::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
        assert_eq!(r.center_x(), 60.0);
        assert_eq!(r.center_y(), 45.0);
        assert_eq!(r.center(), Point::new(60.0, 45.0));

        // unsorted: dimensions go negative, not validated
        let flipped = Rect::new(110.0, 70.0, 10.0, 20.0);
        assert_eq!(flipped.width(), -100.0);
        assert_eq!(flipped.height(), -50.0);
    }

    #[test]
    fn test_offset() {
        let mut r = Rect::new(0.0, 0.0, 10.0, 10.0);
        r.offset(5.0, -5.0);
        assert_eq!(r, Rect::new(5.0, -5.0, 15.0, 5.0));

        r.offset_edges(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r, Rect::new(6.0, -3.0, 18.0, 9.0));
    }

    #[test]
    fn test_offset_to() {
        let mut r = Rect::new(10.0, 20.0, 30.0, 60.0);
        r.offset_to(100.0, 200.0);
        assert_eq!(r, Rect::new(100.0, 200.0, 120.0, 240.0));
        assert_eq!(r.width(), 20.0);
        assert_eq!(r.height(), 40.0);
    }

    #[test]
    fn test_inset() {
        let mut r = Rect::new(0.0, 0.0, 100.0, 100.0);
        r.inset(10.0, 20.0);
        assert_eq!(r, Rect::new(10.0, 20.0, 90.0, 80.0));

        // negative inset grows
        r.inset(-10.0, -20.0);
        assert_eq!(r, Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(10.0, 10.0));
        assert!(r.contains(15.0, 19.999));
        assert!(!r.contains(20.0, 15.0)); // right edge excluded
        assert!(!r.contains(15.0, 20.0)); // bottom edge excluded
        assert!(!r.contains(9.999, 15.0));

        // empty rectangle contains nothing, even its own corner
        let empty = Rect::new(10.0, 10.0, 10.0, 20.0);
        assert!(!empty.contains(10.0, 15.0));
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert!(outer.contains_rect(&Rect::new(25.0, 25.0, 75.0, 75.0)));
        assert!(!outer.contains_rect(&Rect::new(50.0, 50.0, 101.0, 75.0)));

        // an empty receiver contains nothing
        let empty = Rect::new(50.0, 50.0, 50.0, 100.0);
        assert!(!empty.contains_rect(&Rect::new(50.0, 60.0, 50.0, 70.0)));

        // four-scalar form matches the rect form
        assert!(outer.contains_ltrb(25.0, 25.0, 75.0, 75.0));
        assert!(!outer.contains_ltrb(25.0, 25.0, 75.0, 100.5));
    }

    #[test]
    fn test_intersect() {
        let mut r = Rect::new(100.0, 100.0, 200.0, 200.0);
        assert!(r.intersect_ltrb(50.0, 50.0, 150.0, 150.0));
        assert_eq!(r, Rect::new(100.0, 100.0, 150.0, 150.0));

        // no overlap: receiver left unchanged, not emptied
        assert!(!r.intersect(&Rect::new(50.0, 50.0, 99.0, 150.0)));
        assert_eq!(r, Rect::new(100.0, 100.0, 150.0, 150.0));

        // edge contact is not overlap (strict test)
        assert!(!r.intersect_ltrb(150.0, 100.0, 250.0, 150.0));
        assert_eq!(r, Rect::new(100.0, 100.0, 150.0, 150.0));
    }

    #[test]
    fn test_set_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 25.0, 150.0, 75.0);
        let mut out = Rect::default();
        assert!(out.set_intersect(&a, &b));
        assert_eq!(out, Rect::new(50.0, 25.0, 100.0, 75.0));

        let c = Rect::new(200.0, 200.0, 300.0, 300.0);
        let before = out;
        assert!(!out.set_intersect(&a, &c));
        assert_eq!(out, before);
    }

    #[test]
    fn test_intersects_skips_emptiness_check() {
        // intersects() is a pure strict-overlap predicate; unlike
        // contains() it does not require either input to be non-empty.
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(a.intersects(&Rect::new(99.0, 99.0, 200.0, 200.0)));
        assert!(!a.intersects(&Rect::new(100.0, 0.0, 200.0, 100.0)));
        assert!(Rect::rects_intersect(
            &a,
            &Rect::new(50.0, 50.0, 60.0, 60.0)
        ));

        // a zero-width rect still passes the strict test when its edges
        // fall inside the other rect
        assert!(a.intersects(&Rect::new(50.0, 50.0, 50.0, 60.0)));
    }

    #[test]
    fn test_union() {
        let mut r = Rect::new(0.0, 0.0, 50.0, 50.0);
        r.union(&Rect::new(100.0, 100.0, 150.0, 150.0));
        assert_eq!(r, Rect::new(0.0, 0.0, 150.0, 150.0));

        // empty incoming rect: nothing happens
        r.union(&Rect::new(500.0, 500.0, 500.0, 600.0));
        assert_eq!(r, Rect::new(0.0, 0.0, 150.0, 150.0));

        // empty receiver: replaced entirely
        let mut empty = Rect::default();
        empty.union_ltrb(10.0, 20.0, 30.0, 40.0);
        assert_eq!(empty, Rect::new(10.0, 20.0, 30.0, 40.0));
    }

    #[test]
    fn test_union_point_is_one_sided() {
        let mut r = Rect::new(10.0, 10.0, 20.0, 20.0);
        r.union_point(5.0, 25.0);
        assert_eq!(r, Rect::new(5.0, 10.0, 20.0, 25.0));

        // interior point changes nothing
        r.union_point(12.0, 12.0);
        assert_eq!(r, Rect::new(5.0, 10.0, 20.0, 25.0));

        // documented quirk: on an inverted axis the point is compared
        // against each edge independently, so only the first matching
        // branch fires and the rect is not repaired
        let mut inverted = Rect::new(20.0, 10.0, 10.0, 20.0);
        inverted.union_point(15.0, 15.0);
        assert_eq!(inverted, Rect::new(15.0, 10.0, 10.0, 20.0));
    }

    #[test]
    fn test_sort() {
        let mut r = Rect::new(109.2, 411.1, 21.4, 221.9);
        assert!(r.is_empty());
        r.sort();
        assert_eq!(r, Rect::new(21.4, 221.9, 109.2, 411.1));
        assert!(!r.is_empty());

        // already sorted: untouched
        r.sort();
        assert_eq!(r, Rect::new(21.4, 221.9, 109.2, 411.1));
    }

    #[test]
    fn test_scale() {
        let mut r = Rect::new(1.0, 2.0, 3.0, 4.0);
        r.scale(2.0);
        assert_eq!(r, Rect::new(2.0, 4.0, 6.0, 8.0));

        r.scale(1.0);
        assert_eq!(r, Rect::new(2.0, 4.0, 6.0, 8.0));
    }

    #[test]
    fn test_display() {
        let r = Rect::new(1.0, 2.5, 3.0, 4.0);
        assert_eq!(r.to_string(), "Rect(1, 2.5, 3, 4)");
    }
}
