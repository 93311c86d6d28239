//! # stepwise-adapters
//!
//! Algorithm layer for Stepwise: every engine, plus the catalog that names
//! them.
//!
//! ## Modules
//!
//! - [`plugins`] - Algorithm engines and the algorithm catalog

pub mod plugins;
