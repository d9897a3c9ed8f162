//! Survey case (project) model.
//!
//! The engine only needs the slice of a project that payroll and commission
//! calculations read: who surveyed it, how large the parcel is, what
//! commission was agreed, and whether the case is complete. Directory data
//! (customer, addresses, attachments) lives outside this crate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a survey case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Intake received, not yet assigned.
    Pending,
    /// Assigned to a technician.
    Assigned,
    /// Field survey in progress.
    Surveying,
    /// Office work (drawing, paperwork) in progress.
    OfficeWork,
    /// Case complete; counts toward commissions and per-case allowances.
    Completed,
    /// Case cancelled.
    Cancelled,
}

/// One land-survey engagement, reduced to the fields payroll reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for the case.
    pub id: String,
    /// The technician assigned to the case, if any.
    #[serde(default)]
    pub technician_id: Option<String>,
    /// Parcel area in square meters.
    #[serde(default)]
    pub land_area: Option<Decimal>,
    /// Commission agreed for the case, usually assigned from the
    /// commission rule table when the technician accepts the case.
    #[serde(default)]
    pub commission: Option<Decimal>,
    /// Current lifecycle status.
    pub status: ProjectStatus,
}

impl Project {
    /// Returns true if this case counts toward `technician_id`'s
    /// product pay and per-case allowances.
    pub fn is_completed_by(&self, technician_id: &str) -> bool {
        self.status == ProjectStatus::Completed
            && self.technician_id.as_deref() == Some(technician_id)
    }
}
