//! 3x3 double-precision transform matrix for 2D coordinates.
//!
//! [`Matrix`] holds nine `f64` coefficients in row-major order:
//!
//! ```text
//! | scale_x  skew_x   trans_x |   | x |
//! | skew_y   scale_y  trans_y | * | y |
//! | persp_0  persp_1  persp_2 |   | 1 |
//! ```
//!
//! An *affine* matrix has the bottom row `[0, 0, 1]`; anything else is
//! treated as perspective and mapped points go through a homogeneous
//! divide.
//!
//! # Composition order
//!
//! - `set_*` replaces the matrix outright.
//! - `pre_*` composes `M = M * T`: the new transform applies to
//!   coordinates *first*, in the pre-existing local frame.
//! - `post_*` composes `M = T * M`: the new transform applies *after*
//!   the current matrix.
//!
//! The two directions differ for any non-commuting pair:
//!
//! ```rust
//! use g2d_matrix::Matrix;
//!
//! let mut pre = Matrix::new();
//! pre.set_scale(2.0, 2.0);
//! pre.pre_translate(10.0, 0.0);   // translate, then scale
//! assert_eq!(pre.map_xy(0.0, 0.0), (20.0, 0.0));
//!
//! let mut post = Matrix::new();
//! post.set_scale(2.0, 2.0);
//! post.post_translate(10.0, 0.0); // scale, then translate
//! assert_eq!(post.map_xy(0.0, 0.0), (10.0, 0.0));
//! ```

use g2d_geom::{Point, Rect};
use std::ops::{Index, Mul};
use tracing::debug;

use crate::error::{MatrixError, MatrixResult};

/// A 3x3 transform matrix over `f64`, row-major.
///
/// Created at identity, mutated in place by every transform operation.
/// The nine-coefficient layout (see the index constants) is the
/// interchange format for [`Matrix::get_values`]/[`Matrix::set_values`].
///
/// # Example
///
/// ```rust
/// use g2d_matrix::Matrix;
///
/// let mut m = Matrix::new();
/// assert!(m.is_identity());
///
/// m.set_translate(10.0, 20.0);
/// assert_eq!(m.map_xy(1.0, 2.0), (11.0, 22.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix {
    /// Coefficients in row-major order, indexed by the `M*` constants.
    pub m: [f64; 9],
}

impl Matrix {
    /// Index of the horizontal scale factor.
    pub const MSCALE_X: usize = 0;
    /// Index of the horizontal skew factor.
    pub const MSKEW_X: usize = 1;
    /// Index of the horizontal translation.
    pub const MTRANS_X: usize = 2;
    /// Index of the vertical skew factor.
    pub const MSKEW_Y: usize = 3;
    /// Index of the vertical scale factor.
    pub const MSCALE_Y: usize = 4;
    /// Index of the vertical translation.
    pub const MTRANS_Y: usize = 5;
    /// Index of the first perspective coefficient.
    pub const MPERSP_0: usize = 6;
    /// Index of the second perspective coefficient.
    pub const MPERSP_1: usize = 7;
    /// Index of the homogeneous scale coefficient.
    pub const MPERSP_2: usize = 8;

    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Creates an identity matrix.
    #[inline]
    pub const fn new() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix from nine row-major coefficients.
    #[inline]
    pub const fn from_values(values: [f64; 9]) -> Self {
        Self { m: values }
    }

    /// Returns the nine row-major coefficients.
    #[inline]
    pub const fn to_values(&self) -> [f64; 9] {
        self.m
    }

    /// Copies the nine coefficients into a caller-supplied buffer,
    /// laid out by the `M*` index constants.
    #[inline]
    pub fn get_values(&self, values: &mut [f64; 9]) {
        *values = self.m;
    }

    /// Replaces all nine coefficients from a buffer laid out by the
    /// `M*` index constants.
    #[inline]
    pub fn set_values(&mut self, values: &[f64; 9]) {
        self.m = *values;
    }

    /// Resets to the identity matrix.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Returns `true` if this is exactly the identity matrix.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns `true` if the bottom row is exactly `[0, 0, 1]`, i.e.
    /// the matrix has no perspective component.
    #[inline]
    pub fn is_affine(&self) -> bool {
        self.m[6] == 0.0 && self.m[7] == 0.0 && self.m[8] == 1.0
    }

    /// Returns `true` if every coefficient is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|v| v.is_finite())
    }

    /// Returns `true` if the matrix maps every rectangle to a
    /// rectangle: scale/translate/mirror only, or an exact quarter-turn
    /// of those. Any other rotation, skew, or perspective returns
    /// `false`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use g2d_matrix::Matrix;
    ///
    /// let mut m = Matrix::new();
    /// m.set_scale(2.0, -3.0);
    /// assert!(m.rect_stays_rect());
    ///
    /// m.set_rotate(90.0);
    /// m.m[Matrix::MSCALE_X] = 0.0; // exact quarter turn
    /// m.m[Matrix::MSCALE_Y] = 0.0;
    /// assert!(m.rect_stays_rect());
    ///
    /// m.set_rotate(45.0);
    /// assert!(!m.rect_stays_rect());
    /// ```
    pub fn rect_stays_rect(&self) -> bool {
        if !self.is_affine() {
            return false;
        }
        let m = &self.m;
        if m[1] == 0.0 && m[3] == 0.0 {
            m[0] != 0.0 && m[4] != 0.0
        } else if m[0] == 0.0 && m[4] == 0.0 {
            m[1] != 0.0 && m[3] != 0.0
        } else {
            false
        }
    }

    // --- set_* primitives -------------------------------------------------

    /// Sets the matrix to translate by (dx, dy).
    #[inline]
    pub fn set_translate(&mut self, dx: f64, dy: f64) {
        self.m = [1.0, 0.0, dx, 0.0, 1.0, dy, 0.0, 0.0, 1.0];
    }

    /// Sets the matrix to scale by (sx, sy) about the origin.
    #[inline]
    pub fn set_scale(&mut self, sx: f64, sy: f64) {
        self.m = [sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0];
    }

    /// Sets the matrix to scale by (sx, sy) about the pivot (px, py).
    ///
    /// Equivalent to translate(-px, -py), scale, translate(px, py),
    /// built directly into the coefficients.
    #[inline]
    pub fn set_scale_about(&mut self, sx: f64, sy: f64, px: f64, py: f64) {
        self.m = [sx, 0.0, px - sx * px, 0.0, sy, py - sy * py, 0.0, 0.0, 1.0];
    }

    /// Sets the matrix to rotate by `degrees` about the origin.
    ///
    /// Positive angles rotate the positive x axis toward the positive
    /// y axis.
    #[inline]
    pub fn set_rotate(&mut self, degrees: f64) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.set_sin_cos(sin, cos);
    }

    /// Sets the matrix to rotate by `degrees` about the pivot (px, py).
    #[inline]
    pub fn set_rotate_about(&mut self, degrees: f64, px: f64, py: f64) {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.set_sin_cos_about(sin, cos, px, py);
    }

    /// Sets the matrix to rotate by an angle whose sine and cosine the
    /// caller already has. Produces exactly the coefficients of
    /// [`Matrix::set_rotate`] for a matching angle.
    #[inline]
    pub fn set_sin_cos(&mut self, sin: f64, cos: f64) {
        self.m = [cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0];
    }

    /// Sets the matrix to rotate by an explicit sine/cosine pair about
    /// the pivot (px, py).
    #[inline]
    pub fn set_sin_cos_about(&mut self, sin: f64, cos: f64, px: f64, py: f64) {
        let one_minus_cos = 1.0 - cos;
        self.m = [
            cos,
            -sin,
            sin * py + one_minus_cos * px,
            sin,
            cos,
            -sin * px + one_minus_cos * py,
            0.0,
            0.0,
            1.0,
        ];
    }

    /// Sets the matrix to skew by (kx, ky) about the origin.
    #[inline]
    pub fn set_skew(&mut self, kx: f64, ky: f64) {
        self.m = [1.0, kx, 0.0, ky, 1.0, 0.0, 0.0, 0.0, 1.0];
    }

    /// Sets the matrix to skew by (kx, ky) about the pivot (px, py).
    #[inline]
    pub fn set_skew_about(&mut self, kx: f64, ky: f64, px: f64, py: f64) {
        self.m = [1.0, kx, -kx * py, ky, 1.0, -ky * px, 0.0, 0.0, 1.0];
    }

    // --- concatenation ----------------------------------------------------

    /// Sets this matrix to the product `a * b`. A point mapped through
    /// the result goes through `b` first, then `a`.
    ///
    /// Total over finite doubles; non-finite inputs propagate per
    /// IEEE-754.
    #[inline]
    pub fn set_concat(&mut self, a: &Matrix, b: &Matrix) {
        *self = Self::concat(a, b);
    }

    /// Composes `M = M * other`: `other` applies to coordinates before
    /// the existing transform.
    #[inline]
    pub fn pre_concat(&mut self, other: &Matrix) {
        *self = Self::concat(self, other);
    }

    /// Composes `M = other * M`: `other` applies after the existing
    /// transform.
    #[inline]
    pub fn post_concat(&mut self, other: &Matrix) {
        *self = Self::concat(other, self);
    }

    fn concat(a: &Matrix, b: &Matrix) -> Matrix {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                let mut v = 0.0;
                for k in 0..3 {
                    v += a.m[row * 3 + k] * b.m[k * 3 + col];
                }
                out[row * 3 + col] = v;
            }
        }
        Matrix { m: out }
    }

    // --- pre_* / post_* primitives ----------------------------------------

    /// Pre-composes a translation by (dx, dy).
    pub fn pre_translate(&mut self, dx: f64, dy: f64) {
        let mut t = Matrix::new();
        t.set_translate(dx, dy);
        self.pre_concat(&t);
    }

    /// Pre-composes a scale by (sx, sy).
    pub fn pre_scale(&mut self, sx: f64, sy: f64) {
        let mut t = Matrix::new();
        t.set_scale(sx, sy);
        self.pre_concat(&t);
    }

    /// Pre-composes a scale by (sx, sy) about the pivot (px, py).
    pub fn pre_scale_about(&mut self, sx: f64, sy: f64, px: f64, py: f64) {
        let mut t = Matrix::new();
        t.set_scale_about(sx, sy, px, py);
        self.pre_concat(&t);
    }

    /// Pre-composes a rotation by `degrees`.
    pub fn pre_rotate(&mut self, degrees: f64) {
        let mut t = Matrix::new();
        t.set_rotate(degrees);
        self.pre_concat(&t);
    }

    /// Pre-composes a rotation by `degrees` about the pivot (px, py).
    pub fn pre_rotate_about(&mut self, degrees: f64, px: f64, py: f64) {
        let mut t = Matrix::new();
        t.set_rotate_about(degrees, px, py);
        self.pre_concat(&t);
    }

    /// Pre-composes a skew by (kx, ky).
    pub fn pre_skew(&mut self, kx: f64, ky: f64) {
        let mut t = Matrix::new();
        t.set_skew(kx, ky);
        self.pre_concat(&t);
    }

    /// Pre-composes a skew by (kx, ky) about the pivot (px, py).
    pub fn pre_skew_about(&mut self, kx: f64, ky: f64, px: f64, py: f64) {
        let mut t = Matrix::new();
        t.set_skew_about(kx, ky, px, py);
        self.pre_concat(&t);
    }

    /// Post-composes a translation by (dx, dy).
    pub fn post_translate(&mut self, dx: f64, dy: f64) {
        let mut t = Matrix::new();
        t.set_translate(dx, dy);
        self.post_concat(&t);
    }

    /// Post-composes a scale by (sx, sy).
    pub fn post_scale(&mut self, sx: f64, sy: f64) {
        let mut t = Matrix::new();
        t.set_scale(sx, sy);
        self.post_concat(&t);
    }

    /// Post-composes a scale by (sx, sy) about the pivot (px, py).
    pub fn post_scale_about(&mut self, sx: f64, sy: f64, px: f64, py: f64) {
        let mut t = Matrix::new();
        t.set_scale_about(sx, sy, px, py);
        self.post_concat(&t);
    }

    /// Post-composes a rotation by `degrees`.
    pub fn post_rotate(&mut self, degrees: f64) {
        let mut t = Matrix::new();
        t.set_rotate(degrees);
        self.post_concat(&t);
    }

    /// Post-composes a rotation by `degrees` about the pivot (px, py).
    pub fn post_rotate_about(&mut self, degrees: f64, px: f64, py: f64) {
        let mut t = Matrix::new();
        t.set_rotate_about(degrees, px, py);
        self.post_concat(&t);
    }

    /// Post-composes a skew by (kx, ky).
    pub fn post_skew(&mut self, kx: f64, ky: f64) {
        let mut t = Matrix::new();
        t.set_skew(kx, ky);
        self.post_concat(&t);
    }

    /// Post-composes a skew by (kx, ky) about the pivot (px, py).
    pub fn post_skew_about(&mut self, kx: f64, ky: f64, px: f64, py: f64) {
        let mut t = Matrix::new();
        t.set_skew_about(kx, ky, px, py);
        self.post_concat(&t);
    }

    // --- inversion --------------------------------------------------------

    /// Computes the inverse of this matrix.
    ///
    /// Returns `None` if the matrix is singular (zero or non-finite
    /// determinant, or a non-finite cofactor). The receiver is never
    /// modified. Affine matrices take a cheaper 2x3 path; everything
    /// else goes through full cofactor inversion.
    ///
    /// # Example
    ///
    /// ```rust
    /// use g2d_matrix::Matrix;
    ///
    /// let mut m = Matrix::new();
    /// m.set_translate(10.0, -4.0);
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv.map_xy(10.0, -4.0), (0.0, 0.0));
    ///
    /// let mut collapsed = Matrix::new();
    /// collapsed.set_scale(0.0, 1.0);
    /// assert!(collapsed.inverse().is_none());
    /// ```
    pub fn inverse(&self) -> Option<Matrix> {
        let m = &self.m;

        let out = if self.is_affine() {
            let det = m[0] * m[4] - m[1] * m[3];
            if det == 0.0 || !det.is_finite() {
                debug!(det, "affine matrix is singular");
                return None;
            }
            let inv_det = 1.0 / det;
            Matrix {
                m: [
                    m[4] * inv_det,
                    -m[1] * inv_det,
                    (m[1] * m[5] - m[4] * m[2]) * inv_det,
                    -m[3] * inv_det,
                    m[0] * inv_det,
                    (m[3] * m[2] - m[0] * m[5]) * inv_det,
                    0.0,
                    0.0,
                    1.0,
                ],
            }
        } else {
            let det = m[0] * (m[4] * m[8] - m[5] * m[7])
                - m[1] * (m[3] * m[8] - m[5] * m[6])
                + m[2] * (m[3] * m[7] - m[4] * m[6]);
            if det == 0.0 || !det.is_finite() {
                debug!(det, "perspective matrix is singular");
                return None;
            }
            let inv_det = 1.0 / det;

            // Cofactor matrix, transposed and scaled by 1/det
            Matrix {
                m: [
                    (m[4] * m[8] - m[5] * m[7]) * inv_det,
                    (m[2] * m[7] - m[1] * m[8]) * inv_det,
                    (m[1] * m[5] - m[2] * m[4]) * inv_det,
                    (m[5] * m[6] - m[3] * m[8]) * inv_det,
                    (m[0] * m[8] - m[2] * m[6]) * inv_det,
                    (m[2] * m[3] - m[0] * m[5]) * inv_det,
                    (m[3] * m[7] - m[4] * m[6]) * inv_det,
                    (m[1] * m[6] - m[0] * m[7]) * inv_det,
                    (m[0] * m[4] - m[1] * m[3]) * inv_det,
                ],
            }
        };

        if !out.is_finite() {
            debug!("inverse overflowed to non-finite coefficients");
            return None;
        }
        Some(out)
    }

    // --- mapping ----------------------------------------------------------

    /// Maps the point (x, y) through this matrix, applying the
    /// homogeneous divide when the matrix has a perspective component.
    #[inline]
    pub fn map_xy(&self, x: f64, y: f64) -> (f64, f64) {
        let m = &self.m;
        let tx = m[0] * x + m[1] * y + m[2];
        let ty = m[3] * x + m[4] * y + m[5];
        if self.is_affine() {
            (tx, ty)
        } else {
            let w = m[6] * x + m[7] * y + m[8];
            (tx / w, ty / w)
        }
    }

    /// Maps a [`Point`] through this matrix.
    #[inline]
    pub fn map_point(&self, p: Point) -> Point {
        let (x, y) = self.map_xy(p.x, p.y);
        Point::new(x, y)
    }

    /// Maps the vector (dx, dy), ignoring translation. A vector at the
    /// origin stays at the origin.
    ///
    /// For an affine matrix only the linear part applies. Under
    /// perspective the vector is mapped as a point and the mapped
    /// origin is subtracted, which keeps the origin fixed.
    #[inline]
    pub fn map_vector(&self, dx: f64, dy: f64) -> (f64, f64) {
        if self.is_affine() {
            let m = &self.m;
            (m[0] * dx + m[1] * dy, m[3] * dx + m[4] * dy)
        } else {
            let (ox, oy) = self.map_xy(0.0, 0.0);
            let (px, py) = self.map_xy(dx, dy);
            (px - ox, py - oy)
        }
    }

    /// Maps `dst.len() / 2` interleaved (x, y) pairs from the start of
    /// `src` into `dst`.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::InvalidRange`] if `src` holds fewer
    /// pairs than `dst`.
    pub fn map_points(&self, dst: &mut [f64], src: &[f64]) -> MatrixResult<()> {
        let count = dst.len() / 2;
        self.map_points_range(dst, 0, src, 0, count)
    }

    /// Maps `count` (x, y) pairs read from `src` starting at value
    /// index `src_offset` into `dst` starting at `dst_offset`.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::InvalidRange`] if either window
    /// `[offset, offset + 2*count)` exceeds its slice.
    pub fn map_points_range(
        &self,
        dst: &mut [f64],
        dst_offset: usize,
        src: &[f64],
        src_offset: usize,
        count: usize,
    ) -> MatrixResult<()> {
        check_window(dst.len(), dst_offset, count)?;
        check_window(src.len(), src_offset, count)?;
        for i in 0..count {
            let x = src[src_offset + 2 * i];
            let y = src[src_offset + 2 * i + 1];
            let (mx, my) = self.map_xy(x, y);
            dst[dst_offset + 2 * i] = mx;
            dst[dst_offset + 2 * i + 1] = my;
        }
        Ok(())
    }

    /// Maps `pts.len() / 2` interleaved (x, y) pairs in place.
    ///
    /// Each pair is read in full before it is written, so the result
    /// matches mapping into a fresh buffer.
    pub fn map_points_in_place(&self, pts: &mut [f64]) {
        let count = pts.len() / 2;
        // window [0, 2*count) is in bounds by construction
        let _ = self.map_points_in_place_range(pts, 0, count);
    }

    /// Maps `count` (x, y) pairs in place, starting at value index
    /// `offset`.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::InvalidRange`] if the window exceeds
    /// the slice.
    pub fn map_points_in_place_range(
        &self,
        pts: &mut [f64],
        offset: usize,
        count: usize,
    ) -> MatrixResult<()> {
        check_window(pts.len(), offset, count)?;
        for i in 0..count {
            let x = pts[offset + 2 * i];
            let y = pts[offset + 2 * i + 1];
            let (mx, my) = self.map_xy(x, y);
            pts[offset + 2 * i] = mx;
            pts[offset + 2 * i + 1] = my;
        }
        Ok(())
    }

    /// Maps `dst.len() / 2` interleaved (dx, dy) vectors from the start
    /// of `src` into `dst`, ignoring translation.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::InvalidRange`] if `src` holds fewer
    /// pairs than `dst`.
    pub fn map_vectors(&self, dst: &mut [f64], src: &[f64]) -> MatrixResult<()> {
        let count = dst.len() / 2;
        self.map_vectors_range(dst, 0, src, 0, count)
    }

    /// Maps `count` (dx, dy) vectors read from `src` starting at value
    /// index `src_offset` into `dst` starting at `dst_offset`, ignoring
    /// translation.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::InvalidRange`] if either window
    /// exceeds its slice.
    pub fn map_vectors_range(
        &self,
        dst: &mut [f64],
        dst_offset: usize,
        src: &[f64],
        src_offset: usize,
        count: usize,
    ) -> MatrixResult<()> {
        check_window(dst.len(), dst_offset, count)?;
        check_window(src.len(), src_offset, count)?;
        let origin = (!self.is_affine()).then(|| self.map_xy(0.0, 0.0));
        for i in 0..count {
            let dx = src[src_offset + 2 * i];
            let dy = src[src_offset + 2 * i + 1];
            let (mx, my) = match origin {
                None => {
                    let m = &self.m;
                    (m[0] * dx + m[1] * dy, m[3] * dx + m[4] * dy)
                }
                Some((ox, oy)) => {
                    let (px, py) = self.map_xy(dx, dy);
                    (px - ox, py - oy)
                }
            };
            dst[dst_offset + 2 * i] = mx;
            dst[dst_offset + 2 * i + 1] = my;
        }
        Ok(())
    }

    /// Maps `vecs.len() / 2` interleaved (dx, dy) vectors in place,
    /// ignoring translation.
    pub fn map_vectors_in_place(&self, vecs: &mut [f64]) {
        let count = vecs.len() / 2;
        let _ = self.map_vectors_in_place_range(vecs, 0, count);
    }

    /// Maps `count` (dx, dy) vectors in place, starting at value index
    /// `offset`, ignoring translation.
    ///
    /// # Errors
    ///
    /// Fails with [`MatrixError::InvalidRange`] if the window exceeds
    /// the slice.
    pub fn map_vectors_in_place_range(
        &self,
        vecs: &mut [f64],
        offset: usize,
        count: usize,
    ) -> MatrixResult<()> {
        check_window(vecs.len(), offset, count)?;
        let origin = (!self.is_affine()).then(|| self.map_xy(0.0, 0.0));
        for i in 0..count {
            let dx = vecs[offset + 2 * i];
            let dy = vecs[offset + 2 * i + 1];
            let (mx, my) = match origin {
                None => {
                    let m = &self.m;
                    (m[0] * dx + m[1] * dy, m[3] * dx + m[4] * dy)
                }
                Some((ox, oy)) => {
                    let (px, py) = self.map_xy(dx, dy);
                    (px - ox, py - oy)
                }
            };
            vecs[offset + 2 * i] = mx;
            vecs[offset + 2 * i + 1] = my;
        }
        Ok(())
    }

    /// Maps `src` through this matrix and writes the axis-aligned
    /// bounding box of its four mapped corners into `dst`.
    ///
    /// Under rotation, skew, or perspective the image of a rectangle is
    /// no longer axis-aligned, so the result is the bounding box of the
    /// transformed shape, not the shape itself. The return value is
    /// [`Matrix::rect_stays_rect`]: `true` means `dst` is the exact
    /// image, `false` means it is a bounding approximation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use g2d_geom::Rect;
    /// use g2d_matrix::Matrix;
    ///
    /// let mut m = Matrix::new();
    /// m.set_scale(2.0, 2.0);
    /// let mut dst = Rect::default();
    /// assert!(m.map_rect(&mut dst, &Rect::new(0.0, 0.0, 10.0, 5.0)));
    /// assert_eq!(dst, Rect::new(0.0, 0.0, 20.0, 10.0));
    /// ```
    pub fn map_rect(&self, dst: &mut Rect, src: &Rect) -> bool {
        if self.rect_stays_rect() {
            let (x0, y0) = self.map_xy(src.left, src.top);
            let (x1, y1) = self.map_xy(src.right, src.bottom);
            dst.set(x0, y0, x1, y1);
            dst.sort();
            true
        } else {
            let corners = [
                self.map_xy(src.left, src.top),
                self.map_xy(src.right, src.top),
                self.map_xy(src.right, src.bottom),
                self.map_xy(src.left, src.bottom),
            ];
            let mut left = corners[0].0;
            let mut right = corners[0].0;
            let mut top = corners[0].1;
            let mut bottom = corners[0].1;
            for &(x, y) in &corners[1..] {
                left = left.min(x);
                right = right.max(x);
                top = top.min(y);
                bottom = bottom.max(y);
            }
            dst.set(left, top, right, bottom);
            false
        }
    }

    /// Maps `rect` in place; see [`Matrix::map_rect`].
    pub fn map_rect_in_place(&self, rect: &mut Rect) -> bool {
        let src = *rect;
        self.map_rect(rect, &src)
    }

    /// Returns the average radius of the ellipse a circle of `radius`
    /// maps to: the geometric mean of the lengths of the two mapped
    /// orthogonal radius vectors.
    ///
    /// For a pure scale this is `radius * sqrt(sx * sy)`; a plain
    /// multiply by either scale factor would be wrong whenever the
    /// scale is anisotropic.
    pub fn map_radius(&self, radius: f64) -> f64 {
        let (x0, y0) = self.map_vector(radius, 0.0);
        let (x1, y1) = self.map_vector(0.0, radius);
        let d0 = f64::hypot(x0, y0);
        let d1 = f64::hypot(x1, y1);
        (d0 * d1).sqrt()
    }

    // --- glam interop -----------------------------------------------------

    /// Converts to a [`glam::DMat3`] (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        let m = &self.m;
        // glam is column-major, so transpose on the way out
        glam::DMat3::from_cols_array(&[
            m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8],
        ])
    }

    /// Creates a matrix from a [`glam::DMat3`] (column-major).
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        let c = m.to_cols_array();
        Self {
            m: [c[0], c[3], c[6], c[1], c[4], c[7], c[2], c[5], c[8]],
        }
    }
}

fn check_window(len: usize, offset: usize, count: usize) -> MatrixResult<()> {
    match count.checked_mul(2).and_then(|n| n.checked_add(offset)) {
        Some(end) if end <= len => Ok(()),
        _ => Err(MatrixError::InvalidRange { offset, count, len }),
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Matrix * Matrix
impl Mul for Matrix {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::concat(&self, &rhs)
    }
}

impl Index<usize> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.m[i]
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = &self.m;
        write!(
            f,
            "[{}, {}, {}][{}, {}, {}][{}, {}, {}]",
            m[0], m[1], m[2], m[3], m[4], m[5], m[6], m[7], m[8]
        )
    }
}
