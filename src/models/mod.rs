//! Core data models for the shift reconciliation engine.
//!
//! This module contains the attendance input shape, the record filter, and the
//! derived outputs produced by the engine.

mod attendance;
mod filter;
mod reconciliation;

pub use attendance::AttendanceRecord;
pub use filter::{DateFilter, RecordFilter};
pub use reconciliation::{
    AggregateSummary, AuditStep, AuditTrace, AuditWarning, DerivedRecordMetrics, OffsettingType,
    ReconciliationReport,
};
