use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank compatible donors for a recipient
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindDonorsRequest {
    #[validate(length(min = 1, max = 64))]
    #[serde(alias = "recipient_id", rename = "recipientId")]
    pub recipient_id: String,
}

/// Request to measure the distance between two points
///
/// Locations stay untyped here so missing keys surface as
/// `invalid_location` rather than a JSON payload error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceRequest {
    pub loc1: serde_json::Value,
    pub loc2: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Markdown,
}

/// Query string for the dashboard endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DashboardQuery {
    #[serde(default)]
    pub format: ReportFormat,
    #[validate(range(min = 1, max = 50))]
    #[serde(alias = "top_n", rename = "topN")]
    pub top_n: Option<usize>,
}
