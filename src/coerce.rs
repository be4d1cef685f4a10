//! Permissive coercion of [`Value`]s to strings and numbers.
//!
//! Absent and textually empty inputs yield the caller's default; everything
//! else goes through the textual projection. Only explicit numeric text can
//! fail, and then the parse error is surfaced unchanged.

use regex::Regex;
use tracing::trace;

use crate::error::{ConvertError, Result};
use crate::value::Value;

pub fn to_str(v: &Value) -> String {
    to_str_or(v, "")
}

pub fn to_str_or(v: &Value, default: &str) -> String {
    if v.is_absent() {
        return default.to_owned();
    }
    let s = v.to_string();
    if s.is_empty() { default.to_owned() } else { s }
}

/// Like [`to_str`] but collapses an empty result back into `None`.
pub fn blank_to_null(v: &Value) -> Option<String> {
    let s = to_str(v);
    if s.is_empty() { None } else { Some(s) }
}

pub fn to_int(v: &Value) -> Result<i32> {
    to_int_or(v, 0)
}

pub fn to_int_or(v: &Value, default: i32) -> Result<i32> {
    let s = to_str(v);
    if s.is_empty() {
        return Ok(default);
    }
    s.parse::<i32>()
        .map_err(|source| ConvertError::Int { text: s, source })
}

pub fn to_long(v: &Value) -> Result<i64> {
    to_long_or(v, 0)
}

/// Parses through `f64` and rounds half away from zero, so `"1.7"` becomes
/// `2` and `"3.4"` becomes `3`. Lossy above 2^53; callers passing decimal
/// strings rely on this looseness.
pub fn to_long_or(v: &Value, default: i64) -> Result<i64> {
    let s = to_str(v);
    if s.is_empty() {
        return Ok(default);
    }
    let d = s
        .parse::<f64>()
        .map_err(|source| ConvertError::Number { text: s, source })?;
    Ok(d.round() as i64)
}

pub fn to_double(v: &Value) -> Result<f64> {
    to_double_or(v, 0.0)
}

pub fn to_double_or(v: &Value, default: f64) -> Result<f64> {
    let s = to_str(v);
    if s.is_empty() {
        return Ok(default);
    }
    s.parse::<f64>()
        .map_err(|source| ConvertError::Number { text: s, source })
}

pub fn is_empty(v: &Value) -> bool {
    v.is_empty()
}

pub fn is_not_empty(v: &Value) -> bool {
    !v.is_empty()
}

/// Regex split of the textual projection, keeping trailing empty fields.
/// Empty input splits to `None` rather than to a one-element list.
pub fn split(v: &Value, pattern: &str) -> Result<Option<Vec<String>>> {
    if v.is_empty() {
        trace!(pattern, "split on empty input");
        return Ok(None);
    }
    let re = Regex::new(pattern)?;
    let text = to_str(v);
    Ok(Some(re.split(&text).map(str::to_owned).collect()))
}
