//! HTTP API module for the shift reconciliation engine.
//!
//! Exposes reconciliation of attendance rows and the single-row
//! delay-to-finish calculation as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceRecordRequest, DelayToFinishRequest, ReconcileRequest};
pub use response::{ApiError, DelayToFinishResponse, ReconcileResponse};
pub use state::AppState;
