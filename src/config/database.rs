//! Database connection pool initialization.
//!
//! The connection string is read from the `DATABASE_URL` environment
//! variable. The pool is created once at startup, stored in
//! [`crate::state::AppState`], and shared by every handler; it is the only
//! process-wide shared resource.

use sqlx::PgPool;
use std::env;

/// Initializes the PostgreSQL connection pool.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is unset or the database is unreachable.
/// This runs once at startup, before the server binds.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
