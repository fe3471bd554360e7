//! # g2d-geom
//!
//! Geometric value types for double-precision 2D coordinate mapping.
//!
//! This crate provides the primitives the g2d transform kernel operates
//! on:
//!
//! - [`Point`] - a 2D (x, y) coordinate
//! - [`Rect`] - an axis-aligned rectangle stored as four edges
//!
//! Both are plain `Copy` value types mutated in place by their owner.
//! There is no shared state and no validation layer: NaN and infinity
//! propagate per IEEE-754, and a rectangle may be stored with crossed
//! edges (see [`Rect::sort`]).
//!
//! # Usage
//!
//! ```rust
//! use g2d_geom::{Point, Rect};
//!
//! let r = Rect::new(0.0, 0.0, 100.0, 50.0);
//! assert_eq!(r.center(), Point::new(50.0, 25.0));
//! ```
//!
//! # Feature Flags
//!
//! - `serde` - Enable serialization for both types
//!
//! # Used By
//!
//! - `g2d-matrix` - point, vector and rectangle mapping

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod point;
mod rect;

pub use point::Point;
pub use rect::Rect;
