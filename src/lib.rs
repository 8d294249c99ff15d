//! kavach-geo-rs
//!
//! Workspace host crate. Re-exports [`kavach_geo_core`] so the demos under
//! `demos/` can be run from the repository root with
//! `cargo run --example basic_usage`.
pub use kavach_geo_core::*;
