//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the grading-standard identifier (`StandardId`)
//! - caller-owned course records (`CourseRecord`, `CourseFile`)
//! - engine outputs (`Classification`, `GpaSummary`, `TargetOutcome`)

pub mod types;

pub use types::*;
