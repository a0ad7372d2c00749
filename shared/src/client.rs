//! Client-related types shared between the backend API and the client
//!
//! Response DTOs for the endpoints whose bodies are not plain model
//! lists. Application-level failures arrive as an `{ "error": "..." }`
//! body, possibly alongside a 2xx status; the gateway normalizes those
//! before these types are deserialized.

use serde::{Deserialize, Serialize};

/// Response to a public booking action
///
/// On success the backend supplies a redirect target for the caller to
/// navigate to (an external form/contact flow).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub redirect_url: Option<String>,
}

/// Response to an admin logo upload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub url: Option<String>,
}
