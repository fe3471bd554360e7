//! # g2d-matrix
//!
//! Double-precision 3x3 transform matrix for 2D graphics.
//!
//! This crate is the core of g2d: a [`Matrix`] holding nine `f64`
//! coefficients (2x3 affine plus an optional perspective row) that is
//! composed with `set_*`/`pre_*`/`post_*` operations and applied to
//! points, vectors, and rectangles from [`g2d_geom`].
//!
//! - [`Matrix`] - the transform itself: compose, invert, map
//! - [`ScaleToFit`] - alignment policy for rectangle-to-rectangle fits
//! - [`MatrixError`] - range errors from the batched mapping calls
//!
//! # Usage
//!
//! ```rust
//! use g2d_matrix::{Matrix, Rect, ScaleToFit};
//!
//! // fit a 100x100 source into a wide destination, centered
//! let mut m = Matrix::new();
//! m.set_rect_to_rect(
//!     &Rect::new(0.0, 0.0, 100.0, 100.0),
//!     &Rect::new(0.0, 0.0, 300.0, 100.0),
//!     ScaleToFit::Center,
//! );
//! assert_eq!(m.map_xy(0.0, 0.0), (100.0, 0.0));
//! assert_eq!(m.map_xy(100.0, 100.0), (200.0, 100.0));
//! ```
//!
//! # Composition order
//!
//! `pre_*` composes the new transform into the local frame (it applies
//! to coordinates first); `post_*` composes it after the existing
//! transform. See the [`Matrix`] docs for the exact products.
//!
//! # Feature Flags
//!
//! - `serde` - Enable serialization for [`Matrix`] and [`ScaleToFit`]
//!   (and the g2d-geom types)
//!
//! # Dependencies
//!
//! - [`g2d_geom`] - the `Point`/`Rect` value types being mapped
//! - [`glam`] - `DMat3` interop

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod fit;
mod matrix;

pub use error::{MatrixError, MatrixResult};
pub use fit::ScaleToFit;
pub use matrix::Matrix;

// Re-export the geometry types so callers can use one crate.
pub use g2d_geom::{Point, Rect};
