//! Domain models shared by the core services and the API layer.

pub mod auth;
pub mod profile;
