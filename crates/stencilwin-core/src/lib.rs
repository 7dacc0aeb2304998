//! stencilwin core
//!
//! Shared primitives for the stencilwin window system: integer geometry,
//! generational storage, logging and profiling setup.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
