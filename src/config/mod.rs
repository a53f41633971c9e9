//! Application configuration, loaded from environment variables.
//!
//! - [`cors`]: Allowed CORS origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: Token signing secret and lifetime

pub mod cors;
pub mod database;
pub mod jwt;
