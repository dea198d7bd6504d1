use crate::core::{
    dashboard::{build_dashboard, DashboardReport},
    distance::distance_km,
    inventory::{audit_inventory, ShortageThresholds},
    matcher::find_compatible_donors,
    outcome::{ToolError, ToolOutcome},
};
use crate::models::{DonorMatch, Location, ShortageNotice};
use crate::services::DatasetSource;
use std::sync::Arc;

/// Longest recipient id accepted by [`DonationTools::match_donors`]
pub const MAX_ID_LEN: usize = 64;

/// The callable tool boundary handed to the orchestration layer
///
/// Every operation reloads the dataset, so calls are independent and
/// safe to run concurrently from a shared instance. No operation panics
/// or propagates an error; failures come back as [`ToolError`] values.
#[derive(Clone)]
pub struct DonationTools {
    source: Arc<dyn DatasetSource>,
    thresholds: ShortageThresholds,
}

impl DonationTools {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self {
            source,
            thresholds: ShortageThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: ShortageThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Report low blood and organ stock across all hospitals
    pub fn audit_inventory(&self) -> ToolOutcome<ShortageNotice> {
        tracing::info!("Auditing inventory");

        let outcome = match self.source.load() {
            Ok(dataset) => {
                ToolOutcome::from_results(audit_inventory(&dataset.hospitals, &self.thresholds))
            }
            Err(e) => ToolOutcome::Error(ToolError::from(e)),
        };

        log_outcome("audit_inventory", &outcome);
        outcome
    }

    /// Compatible, available donors for a recipient, nearest first
    pub fn match_donors(&self, recipient_id: &str) -> ToolOutcome<DonorMatch> {
        tracing::info!("Finding compatible donors for recipient: {}", recipient_id);

        let outcome = ToolOutcome::from(self.try_match_donors(recipient_id));

        log_outcome("match_donors", &outcome);
        outcome
    }

    fn try_match_donors(&self, recipient_id: &str) -> Result<Vec<DonorMatch>, ToolError> {
        validate_identifier(recipient_id)?;
        let dataset = self.source.load()?;
        Ok(find_compatible_donors(&dataset, recipient_id)?)
    }

    /// Geodesic distance in km between two loosely-typed location objects
    pub fn distance(&self, loc1: &serde_json::Value, loc2: &serde_json::Value) -> Result<f64, ToolError> {
        let result = distance(loc1, loc2);
        if let Err(e) = &result {
            tracing::warn!("distance rejected: {}", e);
        }
        result
    }

    /// Inventory, top matches and alerts for every recipient
    pub fn dashboard_report(&self, top_n: usize) -> Result<DashboardReport, ToolError> {
        tracing::info!("Building dashboard report (top {})", top_n);

        if top_n == 0 {
            return Err(ToolError::InvalidInput("top_n must be at least 1".to_string()));
        }

        let dataset = self.source.load().map_err(|e| {
            tracing::error!("Dashboard report failed: {}", e);
            ToolError::from(e)
        })?;

        Ok(build_dashboard(&dataset, &self.thresholds, top_n))
    }
}

/// Parse and measure two location objects; see [`distance_km`]
pub fn distance(loc1: &serde_json::Value, loc2: &serde_json::Value) -> Result<f64, ToolError> {
    let from = Location::from_value(loc1)?;
    let to = Location::from_value(loc2)?;
    Ok(distance_km(&from, &to)?)
}

/// Accept ids made of ASCII letters, digits, `-` and `_`
pub fn validate_identifier(id: &str) -> Result<(), ToolError> {
    if id.is_empty() {
        return Err(ToolError::InvalidInput("recipient id must not be empty".to_string()));
    }
    if id.len() > MAX_ID_LEN {
        return Err(ToolError::InvalidInput(format!(
            "recipient id longer than {} characters",
            MAX_ID_LEN
        )));
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(ToolError::InvalidInput(format!(
            "recipient id {:?} is not a plain identifier",
            id
        )));
    }
    Ok(())
}

fn log_outcome<T>(operation: &str, outcome: &ToolOutcome<T>) {
    match outcome {
        ToolOutcome::Found(results) => {
            tracing::debug!("{} returned {} result(s)", operation, results.len())
        }
        ToolOutcome::Empty => tracing::debug!("{} returned no results", operation),
        ToolOutcome::Error(e) => tracing::warn!("{} failed ({}): {}", operation, e.kind(), e),
    }
}
