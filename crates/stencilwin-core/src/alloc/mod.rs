//! Collections used across stencilwin.
//!
//! - [`HashMap`], backed by AHash, for small lookup tables such as hooks
//! - [`SparseSet`](sparse_set::SparseSet), generational storage for windows

pub mod sparse_set;

pub use sparse_set::{IndexSlot, SparseSet};

pub use ahash::AHashMap as HashMap;
