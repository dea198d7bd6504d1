use crate::core::compatibility::can_donate;
use crate::models::{Donor, Recipient};

/// Check if a donor can serve a recipient's need
///
/// Organ needs require the same organ and a compatible blood type;
/// blood-only needs require a compatible blood type alone.
#[inline]
pub fn matches_need(donor: &Donor, recipient: &Recipient) -> bool {
    if let Some(organ) = recipient.organ_needed() {
        if donor.organ() != Some(organ) {
            return false;
        }
    }

    can_donate(donor.blood_type, recipient.blood_type_needed)
}

/// Available donors that satisfy the recipient's need
#[inline]
pub fn is_candidate(donor: &Donor, recipient: &Recipient) -> bool {
    donor.available && matches_need(donor, recipient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BloodType, Location};

    fn donor(blood_type: BloodType, organ: Option<&str>, available: bool) -> Donor {
        Donor {
            id: "D001".to_string(),
            blood_type,
            organ: organ.map(str::to_string),
            available,
            location: Location { latitude: 0.0, longitude: 0.0 },
        }
    }

    fn recipient(blood_type_needed: BloodType, organ_needed: Option<&str>) -> Recipient {
        Recipient {
            id: "R001".to_string(),
            hospital_id: "H001".to_string(),
            blood_type_needed,
            organ_needed: organ_needed.map(str::to_string),
        }
    }

    #[test]
    fn test_blood_only_need() {
        let needy = recipient(BloodType::APos, None);

        assert!(is_candidate(&donor(BloodType::ONeg, None, true), &needy));
        // Organ donors can still give blood
        assert!(is_candidate(&donor(BloodType::APos, Some("Kidney"), true), &needy));
        assert!(!is_candidate(&donor(BloodType::BPos, None, true), &needy));
    }

    #[test]
    fn test_unavailable_filtered() {
        let needy = recipient(BloodType::ONeg, None);
        assert!(!is_candidate(&donor(BloodType::ONeg, None, false), &needy));
    }

    #[test]
    fn test_organ_need() {
        let needy = recipient(BloodType::BPos, Some("Kidney"));

        assert!(is_candidate(&donor(BloodType::ONeg, Some("Kidney"), true), &needy));
        assert!(!is_candidate(&donor(BloodType::ONeg, Some("Liver"), true), &needy));
        assert!(!is_candidate(&donor(BloodType::ONeg, None, true), &needy));
        // Right organ, wrong blood
        assert!(!is_candidate(&donor(BloodType::APos, Some("Kidney"), true), &needy));
    }
}
