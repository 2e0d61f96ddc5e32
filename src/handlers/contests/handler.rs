//! Contest handler implementations

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    services::ContestService,
    state::AppState,
};

use super::response::ContestsListResponse;

/// Parse a path-supplied contest identifier.
///
/// A malformed id is rejected here, before any database access occurs.
fn parse_contest_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest("Invalid contest ID format".to_string()))
}

/// List all contests
pub async fn list_contests(
    State(state): State<AppState>,
) -> AppResult<Json<ContestsListResponse>> {
    let contests = ContestService::list_contests(state.db()).await?;

    Ok(Json(ContestsListResponse { contests }))
}

/// Get a specific contest
pub async fn get_contest(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_contest_id(&id)?;
    let contest = ContestService::get_contest(state.db(), id).await?;

    Ok(Json(contest))
}

/// Join a contest, incrementing its occupancy under the capacity guard
pub async fn join_contest(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_contest_id(&id)?;
    let contest = ContestService::join_contest(state.db(), id).await?;

    Ok(Json(contest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_integer_ids() {
        assert_eq!(parse_contest_id("42").unwrap(), 42);
        assert_eq!(parse_contest_id("0").unwrap(), 0);
        assert_eq!(parse_contest_id("-7").unwrap(), -7);
    }

    #[test]
    fn parse_rejects_non_integer_ids() {
        for raw in ["abc", "12.5", "", "1e3", " 1", "12abc"] {
            assert!(
                matches!(parse_contest_id(raw), Err(AppError::BadRequest(_))),
                "expected BadRequest for {raw:?}"
            );
        }
    }
}
