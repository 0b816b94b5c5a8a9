//! User Portal - a server-rendered user sign-up service.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and the sign-up form
//! - **services**: Application use cases and business logic
//! - **infra**: Storage implementations behind the domain traits
//! - **api**: HTTP handlers, form binding, and routes
//! - **views**: Server-rendered pages
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod views;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, Role, SignupForm, User};
pub use errors::{AppError, AppResult};
