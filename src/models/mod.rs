// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BloodType, Dataset, DatasetValidationError, Donor, DonorMatch, Hospital, Inventory, InventoryItem, Location,
    LocationError, Recipient, ShortageNotice, ShortageSeverity, UnknownBloodType,
};
pub use requests::{DashboardQuery, DistanceRequest, FindDonorsRequest, ReportFormat};
pub use responses::{DistanceResponse, ErrorResponse, HealthResponse};
