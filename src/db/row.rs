//! Dynamic row-to-JSON decoding
//!
//! The contest table carries columns this service does not interpret
//! (entry fees, prizes, schedules). Rows are therefore decoded
//! column-by-column into JSON objects based on the Postgres type of each
//! value, rather than through a fixed model struct. Integers stay numbers,
//! text stays strings, and SQL NULL becomes JSON null.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use sqlx::postgres::PgRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};
use uuid::Uuid;

use crate::error::AppResult;

/// Decode every column of a row into a JSON object, keyed by column name.
pub fn row_to_json(row: &PgRow) -> AppResult<Value> {
    let mut object = Map::with_capacity(row.len());
    for (index, column) in row.columns().iter().enumerate() {
        object.insert(column.name().to_string(), decode_column(row, index)?);
    }
    Ok(Value::Object(object))
}

fn decode_column(row: &PgRow, index: usize) -> AppResult<Value> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }

    let type_name = raw.type_info().name().to_string();

    let value = match type_name.as_str() {
        "INT2" => Value::from(row.try_get::<i16, _>(index)?),
        "INT4" => Value::from(row.try_get::<i32, _>(index)?),
        "INT8" => Value::from(row.try_get::<i64, _>(index)?),
        "FLOAT4" => Value::from(row.try_get::<f32, _>(index)?),
        "FLOAT8" => Value::from(row.try_get::<f64, _>(index)?),
        "BOOL" => Value::from(row.try_get::<bool, _>(index)?),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => Value::from(row.try_get::<String, _>(index)?),
        "UUID" => Value::from(row.try_get::<Uuid, _>(index)?.to_string()),
        "JSON" | "JSONB" => row.try_get::<Value, _>(index)?,
        "TIMESTAMPTZ" => Value::from(row.try_get::<DateTime<Utc>, _>(index)?.to_rfc3339()),
        "TIMESTAMP" => Value::from(row.try_get::<NaiveDateTime, _>(index)?.to_string()),
        "DATE" => Value::from(row.try_get::<NaiveDate, _>(index)?.to_string()),
        // Columns of any other type are passed through as text when the
        // driver can render them, and as null otherwise.
        _ => row
            .try_get::<String, _>(index)
            .map(Value::from)
            .unwrap_or(Value::Null),
    };

    Ok(value)
}
