use crate::models::BloodType;
use crate::models::BloodType::*;

/// Donor blood types that may supply a recipient of the given type
///
/// Standard ABO/Rh transfusion rules: O- gives to everyone, AB+ takes
/// from everyone, and Rh- may give to Rh+ of the same ABO group but not
/// the other way round.
pub fn compatible_donors(needed: BloodType) -> &'static [BloodType] {
    match needed {
        APos => &[APos, ANeg, OPos, ONeg],
        ANeg => &[ANeg, ONeg],
        BPos => &[BPos, BNeg, OPos, ONeg],
        BNeg => &[BNeg, ONeg],
        AbPos => &[APos, ANeg, BPos, BNeg, AbPos, AbNeg, OPos, ONeg],
        AbNeg => &[ANeg, BNeg, AbNeg, ONeg],
        OPos => &[OPos, ONeg],
        ONeg => &[ONeg],
    }
}

/// Same as [`compatible_donors`] for a raw code; unknown codes match nothing
pub fn compatible_donors_for_code(code: &str) -> &'static [BloodType] {
    code.parse::<BloodType>()
        .map(compatible_donors)
        .unwrap_or(&[])
}

#[inline]
pub fn can_donate(donor: BloodType, recipient: BloodType) -> bool {
    compatible_donors(recipient).contains(&donor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(types: &[BloodType]) -> Vec<&'static str> {
        types.iter().map(|t| t.code()).collect()
    }

    #[test]
    fn test_compatibility_table() {
        let expected: [(&str, &[&str]); 8] = [
            ("A+", &["A+", "A-", "O+", "O-"]),
            ("A-", &["A-", "O-"]),
            ("B+", &["B+", "B-", "O+", "O-"]),
            ("B-", &["B-", "O-"]),
            ("AB+", &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"]),
            ("AB-", &["A-", "B-", "AB-", "O-"]),
            ("O+", &["O+", "O-"]),
            ("O-", &["O-"]),
        ];

        for (needed, donors) in expected {
            assert_eq!(codes(compatible_donors_for_code(needed)), donors, "needed {}", needed);
        }
    }

    #[test]
    fn test_unknown_code_matches_nothing() {
        assert!(compatible_donors_for_code("C+").is_empty());
        assert!(compatible_donors_for_code("").is_empty());
        assert!(compatible_donors_for_code("ab+").is_empty());
    }

    #[test]
    fn test_universal_donor_and_recipient() {
        for blood_type in BloodType::ALL {
            assert!(can_donate(ONeg, blood_type));
            assert!(can_donate(blood_type, AbPos));
        }
    }

    #[test]
    fn test_rh_direction() {
        assert!(can_donate(ANeg, APos));
        assert!(!can_donate(APos, ANeg));
        assert!(!can_donate(OPos, ONeg));
    }
}
