//! Benchmark harness crate for g2d; see `benches/g2d_bench.rs`.
