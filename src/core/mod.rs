// Core engine exports
pub mod compatibility;
pub mod dashboard;
pub mod distance;
pub mod filters;
pub mod inventory;
pub mod matcher;
pub mod outcome;
pub mod tools;

pub use compatibility::{can_donate, compatible_donors, compatible_donors_for_code};
pub use dashboard::{build_dashboard, DashboardReport, RecipientMatches, SosAlert};
pub use distance::distance_km;
pub use filters::{is_candidate, matches_need};
pub use inventory::{audit_inventory, ShortageThresholds};
pub use matcher::{find_compatible_donors, rank_donors, MatchError};
pub use outcome::{ToolError, ToolOutcome};
pub use tools::DonationTools;
