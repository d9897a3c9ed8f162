//! Core data models for the Payroll and Quotation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod payroll;
mod project;
mod quote;

pub use attendance::{AttendanceLedger, DayRecord, DayStatus, WeekendPolicy};
pub use employee::{Allowance, AllowanceFrequency, Employee, SalaryType};
pub use payroll::{InsuranceBase, MonthStats, PayrollDetail, PayrollPolicy, PayrollRecord};
pub use project::{Project, ProjectStatus};
pub use quote::{LineItemKind, QuoteItem, QuoteKind, ZoneType};
