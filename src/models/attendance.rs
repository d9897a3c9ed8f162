//! Attendance ledger for a single calendar month.
//!
//! The ledger holds explicit day-level attendance records per employee,
//! the declared-holiday day set for the month, and the office's weekend
//! working-day policy. Days without an explicit record are resolved to an
//! implicit default by [`crate::calculation::effective_status`].

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Day-level attendance classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Worked the day; pays `multiplier` work-days.
    Present,
    /// Unexcused absence; accrues the absence fine for monthly staff.
    Absent,
    /// Approved paid leave.
    Leave,
    /// Individually recorded holiday (distinct from the global holiday set).
    Holiday,
}

/// One explicit attendance record for a (employee, day) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The day's classification.
    pub status: DayStatus,
    /// Work-day multiplier for overtime/holiday pay. Only meaningful for
    /// `Present`; must be 1, 2 or 3.
    pub multiplier: u32,
}

impl DayRecord {
    /// A plain worked day.
    pub fn present() -> Self {
        Self {
            status: DayStatus::Present,
            multiplier: 1,
        }
    }

    /// Validates the work multiplier range.
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=3).contains(&self.multiplier) {
            return Err(EngineError::InvalidMultiplier {
                multiplier: self.multiplier,
            });
        }
        Ok(())
    }
}

/// Whether Saturdays and Sundays are working days by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendPolicy {
    /// Saturday counts as a working day when no record exists.
    pub work_on_saturday: bool,
    /// Sunday counts as a working day when no record exists.
    pub work_on_sunday: bool,
}

impl Default for WeekendPolicy {
    fn default() -> Self {
        // Offices in this domain typically work Saturdays but not Sundays.
        Self {
            work_on_saturday: true,
            work_on_sunday: false,
        }
    }
}

impl WeekendPolicy {
    /// Returns true if `weekday` is a configured day off.
    pub fn is_day_off(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Sat => !self.work_on_saturday,
            Weekday::Sun => !self.work_on_sunday,
            _ => false,
        }
    }
}

/// Attendance data for every employee over one displayed calendar month.
///
/// # Example
///
/// ```
/// use cadastral_engine::models::{AttendanceLedger, DayRecord, DayStatus, WeekendPolicy};
///
/// let mut ledger = AttendanceLedger::new(2026, 1, WeekendPolicy::default()).unwrap();
/// ledger
///     .set_day("emp_001", 5, DayRecord { status: DayStatus::Leave, multiplier: 1 })
///     .unwrap();
/// assert!(ledger.record("emp_001", 5).is_some());
///
/// ledger.clear_day("emp_001", 5);
/// assert!(ledger.record("emp_001", 5).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceLedger {
    year: i32,
    month: u32,
    weekend: WeekendPolicy,
    /// Explicit records: employee id -> day -> record.
    records: HashMap<String, BTreeMap<u32, DayRecord>>,
    /// Globally declared holiday days for the month.
    holidays: BTreeSet<u32>,
}

impl AttendanceLedger {
    /// Creates an empty ledger for the given year and month.
    pub fn new(year: i32, month: u32, weekend: WeekendPolicy) -> EngineResult<Self> {
        if days_in_month(year, month).is_none() {
            return Err(EngineError::InvalidMonth {
                month: format!("{year:04}-{month:02}"),
            });
        }
        Ok(Self {
            year,
            month,
            weekend,
            records: HashMap::new(),
            holidays: BTreeSet::new(),
        })
    }

    /// Creates an empty ledger from a `YYYY-MM` month string.
    pub fn from_month_str(month: &str, weekend: WeekendPolicy) -> EngineResult<Self> {
        let (y, m) = parse_month(month)?;
        Self::new(y, m, weekend)
    }

    /// The month as `YYYY-MM`.
    pub fn month_label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// The number of days in the ledger's month.
    pub fn days_in_month(&self) -> u32 {
        // Constructor guarantees the month is valid.
        days_in_month(self.year, self.month).unwrap_or(0)
    }

    /// The weekend working-day policy.
    pub fn weekend(&self) -> WeekendPolicy {
        self.weekend
    }

    /// The weekday of a given day in this month, or `None` if out of range.
    pub fn weekday(&self, day: u32) -> Option<Weekday> {
        NaiveDate::from_ymd_opt(self.year, self.month, day).map(|d| d.weekday())
    }

    fn check_day(&self, day: u32) -> EngineResult<()> {
        let days = self.days_in_month();
        if day < 1 || day > days {
            return Err(EngineError::DayOutOfRange {
                day,
                month: self.month_label(),
                days_in_month: days,
            });
        }
        Ok(())
    }

    /// Creates or replaces one day's record for an employee.
    pub fn set_day(&mut self, employee_id: &str, day: u32, record: DayRecord) -> EngineResult<()> {
        self.check_day(day)?;
        record.validate()?;
        self.records
            .entry(employee_id.to_string())
            .or_default()
            .insert(day, record);
        Ok(())
    }

    /// Removes one day's record, reverting the day to its implicit default.
    ///
    /// Clearing a day that has no record is a no-op.
    pub fn clear_day(&mut self, employee_id: &str, day: u32) {
        if let Some(days) = self.records.get_mut(employee_id) {
            days.remove(&day);
            if days.is_empty() {
                self.records.remove(employee_id);
            }
        }
    }

    /// Adds or removes a day from the global holiday set.
    ///
    /// Returns true if the day is a holiday after the toggle. Affects the
    /// implicit default of that day for every employee.
    pub fn toggle_holiday(&mut self, day: u32) -> EngineResult<bool> {
        self.check_day(day)?;
        if self.holidays.remove(&day) {
            Ok(false)
        } else {
            self.holidays.insert(day);
            Ok(true)
        }
    }

    /// Returns true if `day` is in the global holiday set.
    pub fn is_holiday(&self, day: u32) -> bool {
        self.holidays.contains(&day)
    }

    /// Returns the explicit record for an (employee, day) pair, if any.
    pub fn record(&self, employee_id: &str, day: u32) -> Option<&DayRecord> {
        self.records.get(employee_id)?.get(&day)
    }
}

/// Parses a `YYYY-MM` month string.
pub fn parse_month(month: &str) -> EngineResult<(i32, u32)> {
    let invalid = || EngineError::InvalidMonth {
        month: month.to_string(),
    };
    let (y, m) = month.split_once('-').ok_or_else(invalid)?;
    let year: i32 = y.parse().map_err(|_| invalid())?;
    let month_num: u32 = m.parse().map_err(|_| invalid())?;
    if days_in_month(year, month_num).is_none() {
        return Err(invalid());
    }
    Ok((year, month_num))
}

/// Returns the day count of a calendar month, or `None` for invalid input.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}
