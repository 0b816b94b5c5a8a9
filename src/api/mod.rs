//! API layer - HTTP handlers and routing
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers
//! - Form binding support
//! - Route definitions

pub mod forms;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
