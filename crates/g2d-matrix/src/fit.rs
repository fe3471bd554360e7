//! Rectangle-to-rectangle and polygon-to-polygon fitting.
//!
//! [`Matrix::set_rect_to_rect`] computes the transform that maps one
//! rectangle onto another under a [`ScaleToFit`] alignment policy.
//! [`Matrix::set_poly_to_poly`] fits a transform through up to four
//! point correspondences: one pair gives a translation, two a
//! similarity, three a full affine, four a perspective transform.

use g2d_geom::Rect;
use tracing::debug;

use crate::matrix::Matrix;

/// Alignment policy for [`Matrix::set_rect_to_rect`].
///
/// `Fill` scales x and y independently, ignoring aspect ratio. The
/// other three preserve aspect ratio with a uniform scale of
/// `min(scale_x, scale_y)` and position the result at the start,
/// center, or end of the destination's free axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleToFit {
    /// Scale x and y independently until src matches dst exactly.
    Fill,
    /// Uniform scale, aligned to dst's left/top.
    Start,
    /// Uniform scale, centered inside dst.
    Center,
    /// Uniform scale, aligned to dst's right/bottom.
    End,
}

impl Matrix {
    /// Sets this matrix to map `src` onto `dst` under the given
    /// alignment policy.
    ///
    /// Returns `false` and resets to identity if `src` is empty. An
    /// empty `dst` zeroes the linear part (every src point collapses
    /// onto the degenerate destination) and still returns `true`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use g2d_geom::Rect;
    /// use g2d_matrix::{Matrix, ScaleToFit};
    ///
    /// let mut m = Matrix::new();
    /// let ok = m.set_rect_to_rect(
    ///     &Rect::new(0.0, 0.0, 100.0, 50.0),
    ///     &Rect::new(0.0, 0.0, 200.0, 200.0),
    ///     ScaleToFit::Fill,
    /// );
    /// assert!(ok);
    /// assert_eq!(m.map_xy(100.0, 50.0), (200.0, 200.0));
    /// ```
    pub fn set_rect_to_rect(&mut self, src: &Rect, dst: &Rect, stf: ScaleToFit) -> bool {
        if src.is_empty() {
            debug!("empty source rect, resetting to identity");
            self.reset();
            return false;
        }

        if dst.is_empty() {
            self.m = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0];
            return true;
        }

        let mut sx = dst.width() / src.width();
        let mut sy = dst.height() / src.height();
        let mut x_larger = false;
        if stf != ScaleToFit::Fill {
            if sx > sy {
                x_larger = true;
                sx = sy;
            } else {
                sy = sx;
            }
        }

        let mut tx = dst.left - src.left * sx;
        let mut ty = dst.top - src.top * sy;
        if matches!(stf, ScaleToFit::Center | ScaleToFit::End) {
            let mut diff = if x_larger {
                dst.width() - src.width() * sy
            } else {
                dst.height() - src.height() * sy
            };
            if stf == ScaleToFit::Center {
                diff *= 0.5;
            }
            if x_larger {
                tx += diff;
            } else {
                ty += diff;
            }
        }

        self.m = [sx, 0.0, tx, 0.0, sy, ty, 0.0, 0.0, 1.0];
        true
    }

    /// Sets this matrix to the transform that carries `point_count`
    /// source points onto the corresponding destination points.
    ///
    /// Both slices hold interleaved (x, y) values; `src_index` and
    /// `dst_index` are value offsets of the first pair. The fit grows
    /// with the count: 0 resets to identity, 1 is a pure translation,
    /// 2 a translation + uniform scale + rotation, 3 a full affine
    /// transform, 4 a full perspective transform.
    ///
    /// Returns `false` on a count above four, a window falling outside
    /// either slice, or a degenerate point configuration (coincident or
    /// collinear source points, or an unsolvable quad).
    pub fn set_poly_to_poly(
        &mut self,
        src: &[f64],
        src_index: usize,
        dst: &[f64],
        dst_index: usize,
        point_count: usize,
    ) -> bool {
        if point_count > 4 {
            debug!(point_count, "poly fit supports at most 4 points");
            return false;
        }
        if point_count == 0 {
            self.reset();
            return true;
        }

        let window = |slice: &[f64], index: usize| {
            index
                .checked_add(2 * point_count)
                .filter(|&end| end <= slice.len())
        };
        let (Some(src_end), Some(dst_end)) = (window(src, src_index), window(dst, dst_index))
        else {
            debug!(point_count, src_index, dst_index, "poly window out of range");
            return false;
        };
        let src = &src[src_index..src_end];
        let dst = &dst[dst_index..dst_end];

        if point_count == 1 {
            self.set_translate(dst[0] - src[0], dst[1] - src[1]);
            return true;
        }

        // Both polys are expressed as the image of a canonical frame;
        // the fit is then dst_basis * src_basis^-1.
        let Some(src_basis) = poly_basis(src, point_count) else {
            debug!("degenerate source poly");
            return false;
        };
        let Some(src_inv) = src_basis.inverse() else {
            debug!("source poly basis is not invertible");
            return false;
        };
        let Some(dst_basis) = poly_basis(dst, point_count) else {
            debug!("degenerate destination poly");
            return false;
        };

        *self = dst_basis * src_inv;
        true
    }
}

/// Matrix mapping the canonical frame onto `count` points.
///
/// The canonical points are (0,0) and (1,0) for two points — a
/// similarity; (0,0), (1,0), (0,1) for three — an affine frame; and the
/// unit square corners (0,0), (1,0), (1,1), (0,1) for four — a
/// projective frame. Returns `None` when the four-point system is
/// unsolvable; rank failures for two and three points surface when the
/// caller inverts the basis.
fn poly_basis(pts: &[f64], count: usize) -> Option<Matrix> {
    let x = |i: usize| pts[2 * i];
    let y = |i: usize| pts[2 * i + 1];

    match count {
        2 => {
            let dx = x(1) - x(0);
            let dy = y(1) - y(0);
            Some(Matrix::from_values([
                dx,
                -dy,
                x(0),
                dy,
                dx,
                y(0),
                0.0,
                0.0,
                1.0,
            ]))
        }
        3 => Some(Matrix::from_values([
            x(1) - x(0),
            x(2) - x(0),
            x(0),
            y(1) - y(0),
            y(2) - y(0),
            y(0),
            0.0,
            0.0,
            1.0,
        ])),
        4 => {
            // Projective mapping of the unit square onto the quad.
            let sx = x(0) - x(1) + x(2) - x(3);
            let sy = y(0) - y(1) + y(2) - y(3);

            if sx == 0.0 && sy == 0.0 {
                // Parallelogram: the mapping is affine.
                return Some(Matrix::from_values([
                    x(1) - x(0),
                    x(2) - x(1),
                    x(0),
                    y(1) - y(0),
                    y(2) - y(1),
                    y(0),
                    0.0,
                    0.0,
                    1.0,
                ]));
            }

            let dx1 = x(1) - x(2);
            let dx2 = x(3) - x(2);
            let dy1 = y(1) - y(2);
            let dy2 = y(3) - y(2);
            let denom = dx1 * dy2 - dx2 * dy1;
            if denom == 0.0 || !denom.is_finite() {
                return None;
            }

            let g = (sx * dy2 - dx2 * sy) / denom;
            let h = (dx1 * sy - sx * dy1) / denom;
            Some(Matrix::from_values([
                x(1) - x(0) + g * x(1),
                x(3) - x(0) + h * x(3),
                x(0),
                y(1) - y(0) + g * y(1),
                y(3) - y(0) + h * y(3),
                y(0),
                g,
                h,
                1.0,
            ]))
        }
        _ => None,
    }
}
