//! Web layer for the metro route planner.
//!
//! Provides HTTP endpoints for listing cities and stations and for
//! computing routes under each cost model.

mod config;
mod dto;
mod routes;
mod state;

pub use config::{ServerConfig, ServerConfigError};
pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
