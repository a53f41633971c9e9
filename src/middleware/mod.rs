//! Request middleware and extractors.
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. The [`auth::AuthUser`] extractor verifies the token and exposes the
//!    caller's user id
//! 3. Where a route's path id names a user, the [`ownership::require_self`]
//!    layer compares it against the caller before the handler runs
//!
//! # Modules
//!
//! - [`auth`]: Bearer-token authentication extractor
//! - [`ownership`]: Ownership guard and self-only route layer

pub mod auth;
pub mod ownership;
