//! View-models behind the public and admin booth views
//!
//! Each view-model owns its observable state behind `Arc<RwLock<_>>`,
//! is cheap to clone, and absorbs every error into a per-view banner
//! string instead of propagating it. The presentation layer renders
//! snapshots and calls operations; it never talks to the gateway.

pub mod admin;
pub mod directory;

pub use admin::{AdminBoothManager, AdminFlow, AdminState, BoothForm};
pub use directory::{BookOutcome, BoothDirectory, DirectoryState};
