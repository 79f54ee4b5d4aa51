//! HTTP API module for the Compensation Calculation Engine.
//!
//! This module provides the REST API endpoints for computing monthly
//! payroll and loan amortization schedules.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{LoanScheduleRequest, PayrollCalculationRequest};
pub use response::{ApiError, LoanScheduleResponse, PayrollCalculationResponse};
pub use state::AppState;
