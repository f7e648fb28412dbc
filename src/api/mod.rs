//! HTTP API module for the Attendance Engine.
//!
//! This module provides the REST API endpoints for attendance tracking,
//! reporting and payroll.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CheckInRequest, CheckOutRequest, CorrectionRequest, CreateUserRequest, LoginRequest,
    PositionRequest, SlipRequest,
};
pub use response::ApiError;
pub use state::AppState;
