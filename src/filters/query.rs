// src/filters/query.rs

use crate::errors::{AppError, Result};
use std::collections::BTreeMap;
use url::form_urlencoded;

pub type QueryPairs = BTreeMap<String, String>;

/// Splits a form-encoded `key=value&key=value` string into decoded pairs.
/// A key without `=` gets an empty value; a repeated key keeps the last value.
pub fn parse_query(query: &str) -> Result<QueryPairs> {
    let mut map = QueryPairs::new();

    for (key, value) in form_urlencoded::parse(query.trim().trim_start_matches('?').as_bytes()) {
        if key.is_empty() {
            return Err(AppError::invalid(format!(
                "empty key in query pair '={value}'"
            )));
        }
        map.insert(key.into_owned(), value.into_owned());
    }

    Ok(map)
}
