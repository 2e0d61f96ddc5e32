//! Contest repository

use sqlx::PgPool;
use sqlx::postgres::PgRow;

use crate::error::AppResult;

/// Repository for contest database operations
pub struct ContestRepository;

impl ContestRepository {
    /// Fetch all contest rows, in datastore order
    pub async fn list_all(pool: &PgPool) -> AppResult<Vec<PgRow>> {
        let rows = sqlx::query(r#"SELECT * FROM contests"#)
            .fetch_all(pool)
            .await?;

        Ok(rows)
    }

    /// Find a contest row by its identifier
    pub async fn find_by_id(pool: &PgPool, id: i64) -> AppResult<Option<PgRow>> {
        let row = sqlx::query(r#"SELECT * FROM contests WHERE "contestId" = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row)
    }

    /// Increment occupancy for a contest that still has room.
    ///
    /// The capacity guard and the increment are a single statement, so the
    /// database evaluates them atomically; two concurrent joins cannot both
    /// take the last open spot. Returns the number of rows updated: zero
    /// means the contest is full or does not exist.
    pub async fn increment_occupancy(pool: &PgPool, id: i64) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE contests
            SET "currentSize" = "currentSize" + 1
            WHERE "contestId" = $1 AND "currentSize" < "contestSize"
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }
}
