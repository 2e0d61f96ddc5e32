//! Contest response DTOs

use serde::Serialize;
use serde_json::Value;

/// Contest list response
///
/// Each entry is a full row decoded column-for-column; the schema is not
/// fixed by this service.
#[derive(Debug, Serialize)]
pub struct ContestsListResponse {
    pub contests: Vec<Value>,
}
