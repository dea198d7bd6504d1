use crate::models::{BloodType, Hospital, InventoryItem, ShortageNotice, ShortageSeverity};

/// Stock levels below which a notice is raised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortageThresholds {
    /// O- units below this count are a critical shortage
    pub critical: u32,
    /// Any blood type below this count is a shortage
    pub shortage: u32,
}

impl Default for ShortageThresholds {
    fn default() -> Self {
        Self {
            critical: 2,
            shortage: 3,
        }
    }
}

/// Scan every hospital's inventory and report low stock
///
/// Blood entries are checked in key order, then organs. O- below the
/// critical threshold is reported as critical; otherwise any blood type
/// below the shortage threshold (O- included) is a plain shortage. An
/// organ with zero units is reported as unavailable. Negative counts
/// fall under the same rules.
pub fn audit_inventory(hospitals: &[Hospital], thresholds: &ShortageThresholds) -> Vec<ShortageNotice> {
    let mut notices = Vec::new();

    for hospital in hospitals {
        let critical = i64::from(thresholds.critical);
        let shortage = i64::from(thresholds.shortage);

        for (blood_type, &count) in &hospital.inventory.blood {
            let is_universal = blood_type.as_str() == BloodType::ONeg.code();

            if is_universal && count < critical {
                notices.push(ShortageNotice {
                    hospital_id: hospital.id.clone(),
                    hospital_name: hospital.name.clone(),
                    item: InventoryItem::Blood(blood_type.clone()),
                    count,
                    severity: ShortageSeverity::Critical,
                    message: format!(
                        "CRITICAL SHORTAGE: {} has only {} unit(s) of O- blood.",
                        hospital.name, count
                    ),
                });
            } else if count < shortage {
                notices.push(ShortageNotice {
                    hospital_id: hospital.id.clone(),
                    hospital_name: hospital.name.clone(),
                    item: InventoryItem::Blood(blood_type.clone()),
                    count,
                    severity: ShortageSeverity::Shortage,
                    message: format!(
                        "Shortage: {} has only {} unit(s) of {} blood.",
                        hospital.name, count, blood_type
                    ),
                });
            }
        }

        for (organ, &count) in &hospital.inventory.organs {
            if count <= 0 {
                notices.push(ShortageNotice {
                    hospital_id: hospital.id.clone(),
                    hospital_name: hospital.name.clone(),
                    item: InventoryItem::Organ(organ.clone()),
                    count,
                    severity: ShortageSeverity::Unavailable,
                    message: format!("Shortage: {} has no available {}s.", hospital.name, organ),
                });
            }
        }
    }

    notices
}
