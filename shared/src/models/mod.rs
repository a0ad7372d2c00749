//! Data models
//!
//! Shared between the booking backend (via API) and the client.
//! IDs are backend-assigned opaque strings (wire name `_id`); the client
//! never generates one.

pub mod booking_request;
pub mod booth;

// Re-exports
pub use booking_request::*;
pub use booth::*;
