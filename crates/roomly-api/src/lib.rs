//! # roomly-api
//!
//! HTTP layer for the Roomly booking backend: the Axum router, request
//! extractors (authentication gate, validated JSON), DTOs, and handlers.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;
