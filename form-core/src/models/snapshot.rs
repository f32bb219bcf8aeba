use serde::{Deserialize, Serialize};

/// The ten field values captured when a submission completes.
///
/// Serializes to a JSON object keyed by the display labels
/// (`Name`, `Email`, `Mobile`, `DOB`, `Gender`, `ZIP`, `City`, `State`,
/// `Color`, `Notes`), in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Mobile")]
    pub mobile: String,
    #[serde(rename = "DOB")]
    pub dob: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "ZIP")]
    pub zip: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Notes")]
    pub notes: String,
}
