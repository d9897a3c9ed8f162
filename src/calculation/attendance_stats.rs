//! Attendance statistics with implicit-day resolution.
//!
//! The implicit-default rule (no record means present on a working day and
//! uncounted on a day off) lives in exactly one place: the pure
//! [`effective_status`] function. [`compute_month_stats`] folds it over a
//! month.

use chrono::Weekday;

use crate::models::{AttendanceLedger, DayRecord, DayStatus, MonthStats, WeekendPolicy};

/// The resolved classification of one calendar day for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveDay {
    /// A worked day contributing `multiplier` work-days.
    Worked(u32),
    /// A paid leave day.
    PaidLeave,
    /// An unexcused absence day.
    UnpaidAbsence,
    /// A holiday (declared globally or recorded individually).
    Holiday,
    /// A configured day off; counts in no bucket.
    DayOff,
}

/// Resolves one day's effective classification.
///
/// An explicit record always wins. Without one, a declared holiday makes
/// the day a holiday, a configured non-working weekday makes it a day off,
/// and any other day is an implicit single-multiplier worked day.
///
/// # Example
///
/// ```
/// use cadastral_engine::calculation::{EffectiveDay, effective_status};
/// use cadastral_engine::models::WeekendPolicy;
/// use chrono::Weekday;
///
/// let weekend = WeekendPolicy { work_on_saturday: true, work_on_sunday: false };
/// assert_eq!(
///     effective_status(None, false, Some(Weekday::Mon), weekend),
///     EffectiveDay::Worked(1)
/// );
/// assert_eq!(
///     effective_status(None, false, Some(Weekday::Sun), weekend),
///     EffectiveDay::DayOff
/// );
/// ```
pub fn effective_status(
    explicit: Option<&DayRecord>,
    is_declared_holiday: bool,
    weekday: Option<Weekday>,
    weekend: WeekendPolicy,
) -> EffectiveDay {
    if let Some(record) = explicit {
        return match record.status {
            DayStatus::Present => EffectiveDay::Worked(record.multiplier),
            DayStatus::Leave => EffectiveDay::PaidLeave,
            DayStatus::Absent => EffectiveDay::UnpaidAbsence,
            DayStatus::Holiday => EffectiveDay::Holiday,
        };
    }

    if is_declared_holiday {
        return EffectiveDay::Holiday;
    }

    let is_day_off = weekday.is_some_and(|wd| weekend.is_day_off(wd));
    if is_day_off {
        EffectiveDay::DayOff
    } else {
        EffectiveDay::Worked(1)
    }
}

/// Derives one employee's month statistics from the ledger.
///
/// Iterates every day `1..=days_in_month`; worked days add their
/// multiplier to `actual_work_days`, leave/absence/holiday days increment
/// their own counters, and days off count nowhere.
pub fn compute_month_stats(ledger: &AttendanceLedger, employee_id: &str) -> MonthStats {
    let mut stats = MonthStats {
        actual_work_days: 0,
        paid_leave_days: 0,
        absence_days: 0,
        holiday_days: 0,
    };

    for day in 1..=ledger.days_in_month() {
        let effective = effective_status(
            ledger.record(employee_id, day),
            ledger.is_holiday(day),
            ledger.weekday(day),
            ledger.weekend(),
        );
        match effective {
            EffectiveDay::Worked(multiplier) => stats.actual_work_days += multiplier,
            EffectiveDay::PaidLeave => stats.paid_leave_days += 1,
            EffectiveDay::UnpaidAbsence => stats.absence_days += 1,
            EffectiveDay::Holiday => stats.holiday_days += 1,
            EffectiveDay::DayOff => {}
        }
    }

    stats
}
