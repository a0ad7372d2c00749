//! Shared types for the booth booking system
//!
//! Data models and API DTOs used by the client crate and any
//! embedding application.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
