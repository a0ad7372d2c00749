//! Booth Client - client core for the booth booking backend
//!
//! Provides the API gateway, credential store, session guard and the
//! view-models behind the public directory and admin booth manager.
//! The presentation layer sits on top of this crate and only renders
//! the state snapshots the view-models expose.

pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod poller;
pub mod session;
pub mod viewmodel;

pub use config::ClientConfig;
pub use credentials::{AdminCredentials, CredentialStore, FileCredentialStore, Language, MemoryCredentialStore};
pub use error::{ClientError, ClientResult};
pub use http::{ApiClient, LogoFile};
pub use poller::Poller;
pub use session::SessionGuard;
pub use viewmodel::{AdminBoothManager, AdminFlow, BookOutcome, BoothDirectory, BoothForm};

// Re-export shared types for convenience
pub use shared::client::{BookingResponse, UploadResponse};
pub use shared::models::{Booth, BoothCategory, BoothPayload, BoothPosition, BoothStatus, BookingRequest};
