use crate::core::{
    inventory::{audit_inventory, ShortageThresholds},
    matcher::find_compatible_donors,
    outcome::{ToolError, ToolOutcome},
};
use crate::models::{Dataset, DonorMatch, ShortageNotice};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ranked donors for one recipient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientMatches {
    pub recipient_id: String,
    pub hospital_id: String,
    pub need: String,
    pub total_candidates: usize,
    pub top: ToolOutcome<DonorMatch>,
}

/// Outreach message for the nearest donor of a recipient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SosAlert {
    pub recipient_id: String,
    pub donor_id: String,
    pub hospital_name: String,
    pub required: String,
    pub distance_km: f64,
    pub message: String,
}

/// Consolidated inventory, matching and alert report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub report_id: uuid::Uuid,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub shortages: ToolOutcome<ShortageNotice>,
    pub matches: Vec<RecipientMatches>,
    pub alerts: Vec<SosAlert>,
}

/// Build the report for every recipient in the dataset, in file order
pub fn build_dashboard(
    dataset: &Dataset,
    thresholds: &ShortageThresholds,
    top_n: usize,
) -> DashboardReport {
    let shortages = ToolOutcome::from_results(audit_inventory(&dataset.hospitals, thresholds));

    let mut matches = Vec::with_capacity(dataset.recipients.len());
    let mut alerts = Vec::new();

    for recipient in &dataset.recipients {
        let ranked = find_compatible_donors(dataset, &recipient.id).map_err(ToolError::from);
        let total_candidates = ranked.as_ref().map(Vec::len).unwrap_or(0);

        let top = ToolOutcome::from(ranked.map(|mut list| {
            list.truncate(top_n);
            list
        }));

        if let Some(best) = top.results().first() {
            let hospital_name = dataset
                .hospital(&recipient.hospital_id)
                .map(|h| h.name.clone())
                .unwrap_or_else(|| recipient.hospital_id.clone());
            alerts.push(sos_alert(&recipient.id, &hospital_name, &recipient.need(), best));
        }

        matches.push(RecipientMatches {
            recipient_id: recipient.id.clone(),
            hospital_id: recipient.hospital_id.clone(),
            need: recipient.need(),
            total_candidates,
            top,
        });
    }

    tracing::debug!(
        "Dashboard built: {} shortages, {} recipients, {} alerts",
        shortages.results().len(),
        matches.len(),
        alerts.len()
    );

    DashboardReport {
        report_id: uuid::Uuid::new_v4(),
        generated_at: chrono::Utc::now(),
        shortages,
        matches,
        alerts,
    }
}

fn sos_alert(recipient_id: &str, hospital_name: &str, required: &str, best: &DonorMatch) -> SosAlert {
    let message = format!(
        "EMERGENCY SOS: Donor {}, a patient ({}) at {} urgently needs {}. \
         You are {:.2} km away. Please respond as soon as possible.",
        best.donor.id, recipient_id, hospital_name, required, best.distance_km
    );

    SosAlert {
        recipient_id: recipient_id.to_string(),
        donor_id: best.donor.id.clone(),
        hospital_name: hospital_name.to_string(),
        required: required.to_string(),
        distance_km: best.distance_km,
        message,
    }
}

impl DashboardReport {
    /// Render as Markdown with one section per concern
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DashboardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Donation Dashboard Report\n")?;
        writeln!(
            f,
            "_Report {} generated {}_\n",
            self.report_id,
            self.generated_at.to_rfc3339()
        )?;

        writeln!(f, "## Current Inventory Shortages\n")?;
        match &self.shortages {
            ToolOutcome::Found(notices) => {
                for notice in notices {
                    writeln!(f, "- {}", notice)?;
                }
            }
            ToolOutcome::Empty => writeln!(f, "All inventory levels are adequate.")?,
            ToolOutcome::Error(err) => writeln!(f, "Error: {}", err)?,
        }

        writeln!(f, "\n## Top Donor Matches\n")?;
        if self.matches.is_empty() {
            writeln!(f, "No recipients registered.\n")?;
        }
        for entry in &self.matches {
            writeln!(
                f,
                "### {} (needs {}, hospital {})\n",
                entry.recipient_id, entry.need, entry.hospital_id
            )?;
            match &entry.top {
                ToolOutcome::Found(list) => {
                    for (rank, m) in list.iter().enumerate() {
                        let organ = m.donor.organ().map(|o| format!(", {}", o)).unwrap_or_default();
                        writeln!(
                            f,
                            "{}. {} ({}{}) - {:.2} km",
                            rank + 1,
                            m.donor.id,
                            m.donor.blood_type,
                            organ,
                            m.distance_km
                        )?;
                    }
                    writeln!(f, "\n{} compatible donor(s) in total.\n", entry.total_candidates)?;
                }
                ToolOutcome::Empty => writeln!(f, "No compatible donors found.\n")?,
                ToolOutcome::Error(err) => writeln!(f, "Error: {}\n", err)?,
            }
        }

        writeln!(f, "## Generated Emergency Alerts\n")?;
        if self.alerts.is_empty() {
            writeln!(f, "No alerts generated.")?;
        }
        for alert in &self.alerts {
            writeln!(
                f,
                "- **{} -> {}**: {}",
                alert.recipient_id, alert.donor_id, alert.message
            )?;
        }

        Ok(())
    }
}
