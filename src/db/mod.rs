//! Database module
//!
//! This module handles database connections, migrations, row decoding,
//! and repositories.

pub mod connection;
pub mod repositories;
pub mod row;

use sqlx::PgPool;

pub use connection::*;

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
