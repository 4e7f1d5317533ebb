// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::CatalogError;

/// One raw catalog record.
///
/// Only `number` is required. `name` and `tags` feed search; every other
/// field is kept untouched in `extra` for detail views.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogRecord {
    /// Unique positive identity.
    pub number: u32,
    /// Display name.
    pub name: Option<String>,
    /// Free-form search tags.
    pub tags: Vec<String>,
    /// Remaining fields of the source object.
    pub extra: Map<String, Value>,
}

/// Parses a catalog from JSON text.
///
/// The text must be an array of objects. `number` may be an integer, an
/// integral float, or a numeric string (`"07"`). Non-string `name` values
/// and non-array `tags` are ignored.
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogRecord>, CatalogError> {
    let raw: Vec<Map<String, Value>> = serde_json::from_str(json)?;
    if raw.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::with_capacity(raw.len());
    let mut records = Vec::with_capacity(raw.len());
    for (index, mut fields) in raw.into_iter().enumerate() {
        let value = fields
            .remove("number")
            .ok_or(CatalogError::MissingNumber { index })?;
        let number = parse_number(&value).ok_or_else(|| CatalogError::InvalidNumber {
            index,
            value: value.to_string(),
        })?;
        if !seen.insert(number) {
            return Err(CatalogError::DuplicateNumber(number));
        }
        let name = match fields.remove("name") {
            Some(Value::String(name)) if !name.is_empty() => Some(name),
            _ => None,
        };
        let tags = match fields.remove("tags") {
            Some(Value::Array(tags)) => tags
                .into_iter()
                .filter_map(|tag| match tag {
                    Value::String(tag) => Some(tag),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };
        records.push(CatalogRecord {
            number,
            name,
            tags,
            extra: fields,
        });
    }

    tracing::debug!(records = records.len(), "catalog parsed");
    Ok(records)
}

/// Reads and parses a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<CatalogRecord>, CatalogError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&text)
}

fn parse_number(value: &Value) -> Option<u32> {
    let number = match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }?;
    u32::try_from(number).ok().filter(|n| *n > 0)
}

/// Accepts floats such as `12.0` that name a catalog number.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the value is integral and within u32 range"
)]
#[expect(clippy::cast_sign_loss, reason = "the value is non-negative")]
fn integral(f: f64) -> Option<u64> {
    (f.is_finite() && f.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&f))
        .then(|| f as u64)
}
