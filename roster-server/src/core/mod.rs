//! Core module - server configuration, state and services
//!
//! # Structure
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - server state
//! - [`Server`] - HTTP server
//! - [`S3Service`] - pre-signed upload URLs

pub mod config;
pub mod s3;
pub mod server;
pub mod state;

pub use config::Config;
pub use s3::S3Service;
pub use server::Server;
pub use state::ServerState;
