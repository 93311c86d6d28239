//! # stepwise-common
//!
//! Foundation layer for Stepwise: types, step observations, and utilities.
//!
//! This crate provides the building blocks shared by every other Stepwise
//! crate. It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (NodeId, Value, Weight)
//! - [`step`] - Step observations and the emitter that delivers them
//! - [`utils`] - Utility functions and helpers (errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod step;
pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use step::{Aborted, CancellationToken, Observer, Step, StepEmitter, StepLog};
pub use types::{NodeId, Value, Weight};
pub use utils::error::{Error, Result};
