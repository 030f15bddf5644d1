//! Input/output helpers.
//!
//! - course JSON read/write (`store`)
//! - per-course result exports (CSV) (`export`)

pub mod export;
pub mod store;

pub use export::*;
pub use store::*;
