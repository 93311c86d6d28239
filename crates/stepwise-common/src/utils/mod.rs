//! Common utilities used throughout Stepwise.
//!
//! - [`error`] - Error types like [`Error`]

pub mod error;

pub use error::{Error, Result};
