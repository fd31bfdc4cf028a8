//! # warden_core
//!
//! Core domain logic for Warden: credentials, sessions and profiles.

pub mod auth;
pub mod migrate;
pub mod models;
pub mod profile;
pub mod uuid;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
