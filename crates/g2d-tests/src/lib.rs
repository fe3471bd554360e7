//! Integration tests for the g2d crates.
//!
//! These tests exercise the matrix kernel together with the geometry
//! types, cross-check compositions against glam, and pin down the
//! serialization surfaces.
