//! Booking Request Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking request entity
///
/// Created once by the public booking action, then only ever listed by an
/// administrator. `booth_name` is a free-text snapshot taken at booking
/// time, not a live join against the booth record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub booth_number: u32,
    pub booth_name: String,
    pub created_at: DateTime<Utc>,
}

/// Create booking request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequestCreate {
    pub booth_number: u32,
    pub booth_name: String,
}

impl BookingRequestCreate {
    /// Payload for booking a given booth, with the snapshot name the
    /// public site uses ("Booth {number}")
    pub fn for_booth(number: u32) -> Self {
        Self {
            booth_number: number,
            booth_name: format!("Booth {number}"),
        }
    }
}
