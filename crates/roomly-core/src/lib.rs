//! # roomly-core
//!
//! Core crate for the Roomly booking backend. Contains configuration
//! schemas, the unified error system, and the shared result alias.
//!
//! This crate has **no** internal dependencies on other Roomly crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
