use crate::core::matcher::MatchError;
use crate::models::LocationError;
use crate::services::DatasetError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every way a tool call can fail, returned as a value to the caller
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum ToolError {
    #[error("Dataset unreadable: {0}")]
    DatasetUnreadable(String),

    #[error("Dataset malformed: {0}")]
    DatasetMalformed(String),

    #[error("Recipient with ID {0} not found.")]
    RecipientNotFound(String),

    #[error("Hospital with ID {0} not found.")]
    HospitalNotFound(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ToolError {
    /// Stable snake_case name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::DatasetUnreadable(_) => "dataset_unreadable",
            ToolError::DatasetMalformed(_) => "dataset_malformed",
            ToolError::RecipientNotFound(_) => "recipient_not_found",
            ToolError::HospitalNotFound(_) => "hospital_not_found",
            ToolError::InvalidLocation(_) => "invalid_location",
            ToolError::InvalidInput(_) => "invalid_input",
        }
    }
}

impl From<DatasetError> for ToolError {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::Unreadable { .. } => ToolError::DatasetUnreadable(err.to_string()),
            DatasetError::Malformed(message) => ToolError::DatasetMalformed(message),
            DatasetError::Invalid(invalid) => ToolError::DatasetMalformed(invalid.to_string()),
        }
    }
}

impl From<MatchError> for ToolError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::RecipientNotFound(id) => ToolError::RecipientNotFound(id),
            MatchError::HospitalNotFound(id) => ToolError::HospitalNotFound(id),
            MatchError::InvalidLocation { .. } => ToolError::InvalidLocation(err.to_string()),
        }
    }
}

impl From<LocationError> for ToolError {
    fn from(err: LocationError) -> Self {
        ToolError::InvalidLocation(err.to_string())
    }
}

/// Result of a list-producing tool call
///
/// `Empty` means the call succeeded and found nothing; it is never used
/// for failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ToolOutcome<T> {
    Found(Vec<T>),
    Empty,
    Error(ToolError),
}

impl<T> ToolOutcome<T> {
    pub fn from_results(results: Vec<T>) -> Self {
        if results.is_empty() {
            ToolOutcome::Empty
        } else {
            ToolOutcome::Found(results)
        }
    }

    /// Found items, or an empty slice for `Empty` and `Error`
    pub fn results(&self) -> &[T] {
        match self {
            ToolOutcome::Found(results) => results,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&ToolError> {
        match self {
            ToolOutcome::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ToolOutcome::Empty)
    }
}

impl<T> From<Result<Vec<T>, ToolError>> for ToolOutcome<T> {
    fn from(result: Result<Vec<T>, ToolError>) -> Self {
        match result {
            Ok(results) => ToolOutcome::from_results(results),
            Err(err) => ToolOutcome::Error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_vec_becomes_sentinel() {
        let outcome: ToolOutcome<u32> = ToolOutcome::from_results(vec![]);
        assert!(outcome.is_empty());
        assert!(outcome.results().is_empty());
        assert!(outcome.error().is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let found: ToolOutcome<u32> = ToolOutcome::Found(vec![1, 2]);
        assert_eq!(
            serde_json::to_value(&found).unwrap(),
            serde_json::json!({"status": "found", "data": [1, 2]})
        );

        let empty: ToolOutcome<u32> = ToolOutcome::Empty;
        assert_eq!(
            serde_json::to_value(&empty).unwrap(),
            serde_json::json!({"status": "empty"})
        );

        let error: ToolOutcome<u32> = ToolOutcome::Error(ToolError::RecipientNotFound("R9".into()));
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            serde_json::json!({
                "status": "error",
                "data": {"kind": "recipient_not_found", "message": "R9"}
            })
        );
    }

    #[test]
    fn test_kind_matches_serde_tag() {
        let err = ToolError::InvalidInput("x".into());
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["kind"], err.kind());
    }

    #[test]
    fn test_dataset_error_mapping() {
        let err: ToolError = DatasetError::Malformed("missing field `donors`".into()).into();
        assert_eq!(err, ToolError::DatasetMalformed("missing field `donors`".into()));

        let invalid = crate::models::DatasetValidationError::EmptyHospitalId("R7".into());
        let err: ToolError = DatasetError::from(invalid).into();
        assert_eq!(
            err,
            ToolError::DatasetMalformed("recipient R7: empty hospital_id".into())
        );
    }
}
