//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// User Portal - server-rendered user sign-up service
#[derive(Parser, Debug)]
#[command(name = "user-portal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to (falls back to configuration)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on (falls back to configuration)
    #[arg(short, long)]
    pub port: Option<u16>,
}
