use crate::core::{distance::distance_km, filters::is_candidate};
use crate::models::{Dataset, Donor, DonorMatch, Hospital, LocationError, Recipient};
use thiserror::Error;

/// Errors that can occur while matching donors for a recipient
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Recipient with ID {0} not found.")]
    RecipientNotFound(String),

    #[error("Hospital with ID {0} not found.")]
    HospitalNotFound(String),

    #[error("Invalid location for donor {donor_id}: {source}")]
    InvalidLocation {
        donor_id: String,
        #[source]
        source: LocationError,
    },
}

/// Find and rank donors for a recipient in the dataset
///
/// # Pipeline
/// 1. Look up the recipient, then their hospital
/// 2. Keep available donors that satisfy the need
/// 3. Measure each candidate's distance to the hospital
/// 4. Sort nearest first, ties broken by donor id
pub fn find_compatible_donors(
    dataset: &Dataset,
    recipient_id: &str,
) -> Result<Vec<DonorMatch>, MatchError> {
    let recipient = dataset
        .recipient(recipient_id)
        .ok_or_else(|| MatchError::RecipientNotFound(recipient_id.to_string()))?;

    let hospital = dataset
        .hospital(&recipient.hospital_id)
        .ok_or_else(|| MatchError::HospitalNotFound(recipient.hospital_id.clone()))?;

    rank_donors(recipient, hospital, &dataset.donors)
}

/// Rank candidate donors for a recipient treated at `hospital`
pub fn rank_donors(
    recipient: &Recipient,
    hospital: &Hospital,
    donors: &[Donor],
) -> Result<Vec<DonorMatch>, MatchError> {
    let mut matches = donors
        .iter()
        .filter(|donor| is_candidate(donor, recipient))
        .map(|donor| -> Result<DonorMatch, MatchError> {
            let distance_km = distance_km(&donor.location, &hospital.location).map_err(|source| {
                MatchError::InvalidLocation {
                    donor_id: donor.id.clone(),
                    source,
                }
            })?;

            Ok(DonorMatch {
                donor: donor.clone(),
                distance_km,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Stable sort keeps input order for identical (distance, id) pairs
    matches.sort_by(|a, b| {
        a.distance_km
            .total_cmp(&b.distance_km)
            .then_with(|| a.donor.id.cmp(&b.donor.id))
    });

    Ok(matches)
}
