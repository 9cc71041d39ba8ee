//! Flattening of nested listing JSON into a single-level row.
//!
//! Object keys are joined with `.` and array elements are addressed by their
//! index, so `{"dealer": {"city": "Reno"}, "photos": [{"url": "a"}]}` becomes
//! the columns `dealer.city` and `photos.0.url`. Empty objects and arrays keep
//! their key with a [`CellValue::Null`] so the column is not silently lost.
//! Columns come out in the order the keys appear in the response.

use serde_json::Value;

use crate::table::{CellValue, ListingRow};
use crate::types::RawListing;

const SEPARATOR: char = '.';

/// Flattens one listing object into a [`ListingRow`].
#[must_use]
pub fn flatten_listing(listing: RawListing) -> ListingRow {
    let mut row = ListingRow::new();
    for (key, value) in listing {
        flatten_value(key, value, &mut row);
    }
    row
}

fn flatten_value(prefix: String, value: Value, row: &mut ListingRow) {
    match value {
        Value::Object(map) if map.is_empty() => row.push(prefix, CellValue::Null),
        Value::Array(items) if items.is_empty() => row.push(prefix, CellValue::Null),
        Value::Object(map) => {
            for (key, child) in map {
                flatten_value(join(&prefix, &key), child, row);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.into_iter().enumerate() {
                flatten_value(join(&prefix, &index.to_string()), child, row);
            }
        }
        scalar => row.push(prefix, scalar_cell(scalar)),
    }
}

fn join(prefix: &str, key: &str) -> String {
    let mut column = String::with_capacity(prefix.len() + 1 + key.len());
    column.push_str(prefix);
    column.push(SEPARATOR);
    column.push_str(key);
    column
}

fn scalar_cell(value: Value) -> CellValue {
    match value {
        Value::Bool(b) => CellValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => CellValue::Int(i),
            // u64 beyond i64::MAX and all non-integers
            None => n.as_f64().map_or(CellValue::Null, CellValue::Float),
        },
        Value::String(s) => CellValue::Text(s),
        Value::Null | Value::Array(_) | Value::Object(_) => CellValue::Null,
    }
}

#[cfg(test)]
#[path = "flatten_test.rs"]
mod tests;
