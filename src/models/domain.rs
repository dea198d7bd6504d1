use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a coordinate pair is not a valid point on Earth
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("missing coordinate: {0}")]
    MissingKey(&'static str),

    #[error("coordinate {0} is not a number")]
    NotANumber(&'static str),
}

/// Record-level problems found when a dataset document is loaded
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetValidationError {
    #[error("{kind} with empty id")]
    EmptyId { kind: &'static str },

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("{kind} {id}: {source}")]
    BadLocation {
        kind: &'static str,
        id: String,
        #[source]
        source: LocationError,
    },

    #[error("recipient {0}: empty hospital_id")]
    EmptyHospitalId(String),
}

/// Geographic point in degrees
///
/// Accepts both `latitude`/`longitude` and the short `lat`/`lon` keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lon")]
    pub longitude: f64,
}

impl Location {
    /// Build a location, rejecting out-of-range coordinates
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        let location = Self { latitude, longitude };
        location.validate()?;
        Ok(location)
    }

    pub fn validate(&self) -> Result<(), LocationError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(LocationError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(LocationError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }

    /// Parse a loosely-typed location object as handed over by a tool caller
    pub fn from_value(value: &serde_json::Value) -> Result<Self, LocationError> {
        let latitude = coordinate(value, "latitude", "lat")?;
        let longitude = coordinate(value, "longitude", "lon")?;
        Self::new(latitude, longitude)
    }
}

fn coordinate(
    value: &serde_json::Value,
    key: &'static str,
    alias: &'static str,
) -> Result<f64, LocationError> {
    let raw = value
        .get(key)
        .or_else(|| value.get(alias))
        .ok_or(LocationError::MissingKey(key))?;

    raw.as_f64().ok_or(LocationError::NotANumber(key))
}

/// Error for codes outside the eight ABO/Rh blood types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown blood type code: {0}")]
pub struct UnknownBloodType(pub String);

/// ABO/Rh blood type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APos,
    #[serde(rename = "A-")]
    ANeg,
    #[serde(rename = "B+")]
    BPos,
    #[serde(rename = "B-")]
    BNeg,
    #[serde(rename = "AB+")]
    AbPos,
    #[serde(rename = "AB-")]
    AbNeg,
    #[serde(rename = "O+")]
    OPos,
    #[serde(rename = "O-")]
    ONeg,
}

impl BloodType {
    pub const ALL: [BloodType; 8] = [
        BloodType::APos,
        BloodType::ANeg,
        BloodType::BPos,
        BloodType::BNeg,
        BloodType::AbPos,
        BloodType::AbNeg,
        BloodType::OPos,
        BloodType::ONeg,
    ];

    pub fn code(self) -> &'static str {
        match self {
            BloodType::APos => "A+",
            BloodType::ANeg => "A-",
            BloodType::BPos => "B+",
            BloodType::BNeg => "B-",
            BloodType::AbPos => "AB+",
            BloodType::AbNeg => "AB-",
            BloodType::OPos => "O+",
            BloodType::ONeg => "O-",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for BloodType {
    type Err = UnknownBloodType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BloodType::ALL
            .iter()
            .copied()
            .find(|t| t.code() == s)
            .ok_or_else(|| UnknownBloodType(s.to_string()))
    }
}

/// Stock held by a hospital, keyed by blood type code and organ name
///
/// Counts are signed so a ledger that went negative still loads; the
/// auditor treats anything below its thresholds as a shortage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub blood: BTreeMap<String, i64>,
    #[serde(default)]
    pub organs: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub location: Location,
    #[serde(default)]
    pub inventory: Inventory,
}

/// Registered donor; `organ` is absent for blood-only donors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    pub id: String,
    pub blood_type: BloodType,
    #[serde(default)]
    pub organ: Option<String>,
    pub available: bool,
    pub location: Location,
}

impl Donor {
    /// Offered organ, treating an empty string as none
    pub fn organ(&self) -> Option<&str> {
        self.organ.as_deref().filter(|o| !o.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    pub id: String,
    pub hospital_id: String,
    pub blood_type_needed: BloodType,
    #[serde(default)]
    pub organ_needed: Option<String>,
}

impl Recipient {
    /// Needed organ, treating an empty string as a blood-only need
    pub fn organ_needed(&self) -> Option<&str> {
        self.organ_needed.as_deref().filter(|o| !o.is_empty())
    }

    /// Human-readable need, e.g. "Kidney (B+)" or "A+ blood"
    pub fn need(&self) -> String {
        match self.organ_needed() {
            Some(organ) => format!("{} ({})", organ, self.blood_type_needed),
            None => format!("{} blood", self.blood_type_needed),
        }
    }
}

/// The whole read-only dataset document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub hospitals: Vec<Hospital>,
    pub donors: Vec<Donor>,
    pub recipients: Vec<Recipient>,
}

impl Dataset {
    /// Check record-level invariants serde cannot express
    ///
    /// Returns the first offending record.
    pub fn validate(&self) -> Result<(), DatasetValidationError> {
        check_ids("hospital", self.hospitals.iter().map(|h| h.id.as_str()))?;
        check_ids("donor", self.donors.iter().map(|d| d.id.as_str()))?;
        check_ids("recipient", self.recipients.iter().map(|r| r.id.as_str()))?;

        let located = self
            .hospitals
            .iter()
            .map(|h| ("hospital", &h.id, &h.location))
            .chain(self.donors.iter().map(|d| ("donor", &d.id, &d.location)));
        for (kind, id, location) in located {
            location
                .validate()
                .map_err(|source| DatasetValidationError::BadLocation {
                    kind,
                    id: id.clone(),
                    source,
                })?;
        }
        for recipient in &self.recipients {
            if recipient.hospital_id.trim().is_empty() {
                return Err(DatasetValidationError::EmptyHospitalId(recipient.id.clone()));
            }
        }

        Ok(())
    }

    pub fn recipient(&self, id: &str) -> Option<&Recipient> {
        self.recipients.iter().find(|r| r.id == id)
    }

    pub fn hospital(&self, id: &str) -> Option<&Hospital> {
        self.hospitals.iter().find(|h| h.id == id)
    }
}

fn check_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DatasetValidationError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(DatasetValidationError::EmptyId { kind });
        }
        if !seen.insert(id) {
            return Err(DatasetValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// A compatible donor ranked by distance to the recipient's hospital
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorMatch {
    pub donor: Donor,
    pub distance_km: f64,
}

/// How serious an inventory notice is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortageSeverity {
    Critical,
    Shortage,
    Unavailable,
}

/// What the notice is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "name", rename_all = "snake_case")]
pub enum InventoryItem {
    Blood(String),
    Organ(String),
}

/// One low-stock finding for a hospital
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortageNotice {
    pub hospital_id: String,
    pub hospital_name: String,
    pub item: InventoryItem,
    pub count: i64,
    pub severity: ShortageSeverity,
    pub message: String,
}

impl fmt::Display for ShortageNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
