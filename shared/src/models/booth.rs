//! Booth Model

use serde::{Deserialize, Serialize};

/// Sponsorship tier of a booth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoothCategory {
    Diamond,
    Gold,
    Silver,
    #[default]
    Other,
}

/// Occupancy state of a booth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoothStatus {
    #[default]
    Empty,
    Occupied,
}

/// Floorplan placement, percentage coordinates on the exhibition map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoothPosition {
    pub x: f64,
    pub y: f64,
}

/// Booth entity
///
/// `status` and the occupant fields are independently settable: an empty
/// booth may carry occupant data and vice versa. The backend does not
/// enforce a coupling, and neither does the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booth {
    #[serde(rename = "_id")]
    pub id: String,
    /// Unique within the directory, immutable after creation
    pub number: u32,
    #[serde(default)]
    pub category: BoothCategory,
    #[serde(default)]
    pub status: BoothStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_short_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<BoothPosition>,
}

impl Booth {
    /// Whether the booth has coordinates on the floorplan
    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }

    pub fn is_occupied(&self) -> bool {
        self.status == BoothStatus::Occupied
    }
}

/// Create/update booth payload
///
/// The same full payload is sent for create and update; blank occupant
/// fields are omitted rather than sent as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoothPayload {
    pub number: u32,
    pub category: BoothCategory,
    pub status: BoothStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_short_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<BoothPosition>,
}
