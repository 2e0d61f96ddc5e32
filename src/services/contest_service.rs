//! Contest service

use serde_json::Value;
use sqlx::PgPool;

use crate::{
    db::repositories::ContestRepository,
    db::row::row_to_json,
    error::{AppError, AppResult},
};

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// List every contest as a JSON record
    pub async fn list_contests(pool: &PgPool) -> AppResult<Vec<Value>> {
        let rows = ContestRepository::list_all(pool).await?;
        rows.iter().map(row_to_json).collect()
    }

    /// Get a contest by ID
    pub async fn get_contest(pool: &PgPool, id: i64) -> AppResult<Value> {
        let row = ContestRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        row_to_json(&row)
    }

    /// Join a contest: one guarded increment, then a re-read of the row.
    ///
    /// A zero-row update does not distinguish "full" from "missing"; both
    /// terminate as a single Conflict outcome.
    pub async fn join_contest(pool: &PgPool, id: i64) -> AppResult<Value> {
        let affected = ContestRepository::increment_occupancy(pool, id).await?;

        match affected {
            0 => {
                return Err(AppError::Conflict(
                    "Contest full or not found".to_string(),
                ));
            }
            1 => {}
            n => {
                // contestId is a unique key; more than one updated row means
                // the occupancy data can no longer be trusted.
                return Err(AppError::Internal(anyhow::anyhow!(
                    "conditional update touched {n} rows for contest {id}"
                )));
            }
        }

        tracing::debug!(contest_id = id, "Join accepted");

        // The row can be deleted between the update and this read.
        let row = ContestRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        row_to_json(&row)
    }
}
