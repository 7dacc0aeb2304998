//! Integer vector math used for window coordinates.
//!
//! Window geometry lives on an integer logical grid, so only the `i32`
//! vector types from [`glam`] are re-exported here.
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{IVec2, ivec2};
