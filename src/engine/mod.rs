//! The GPA engine: pure functions over caller-owned data.
//!
//! Responsibilities:
//!
//! - classify a single score into a (label, points) pair under a standard
//! - aggregate course records into weighted GPA, globally or per term
//! - solve for the average needed over a future unit load to reach a target
//!
//! Every operation is a synchronous pure function; the engine holds no state
//! across invocations and never retains a reference to its inputs.

pub mod aggregate;
pub mod classify;
pub mod target;

pub use aggregate::*;
pub use classify::*;
pub use target::*;
