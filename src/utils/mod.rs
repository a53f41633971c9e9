//! Shared utilities.
//!
//! - [`errors`]: Application error type and HTTP mapping
//! - [`jwt`]: Token creation and verification
//! - [`password`]: Password hashing and verification
//! - [`response`]: Success response envelope types

pub mod errors;
pub mod jwt;
pub mod password;
pub mod response;
