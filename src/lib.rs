//! Donor Match - matching and inventory tools for donation logistics
//!
//! This library provides the engine behind the donation agent tools:
//! ABO/Rh compatibility, geodesic donor ranking and inventory audits
//! over a read-only dataset document.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{DonationTools, ToolError, ToolOutcome, distance::distance_km};
pub use models::{BloodType, Dataset, Donor, DonorMatch, Hospital, Location, Recipient, ShortageNotice};
