//! Linear membership queries over arrays, sequences and rows.
//!
//! Matching is always on textual projections, never on typed equality:
//! heterogeneous rows compare `42` and `"42"` as equal. Misses return `-1`.

use crate::coerce::to_str;
use crate::value::{Row, Value};

/// Index of the first array element textually equal to `val`, else `-1`.
pub fn in_array<S: AsRef<str>>(arr: Option<&[S]>, val: &Value) -> i32 {
    let Some(arr) = arr else {
        return -1;
    };
    let needle = to_str(val);
    for (i, s) in arr.iter().enumerate() {
        if s.as_ref() == needle {
            return i as i32;
        }
    }
    -1
}

/// Index of the first sequence element textually equal to `val`, else `-1`.
/// Two absent values project to the same empty text and therefore match.
pub fn in_list(seq: &[Value], val: &Value) -> i32 {
    let needle = to_str(val);
    for (i, v) in seq.iter().enumerate() {
        if to_str(v) == needle {
            return i as i32;
        }
    }
    -1
}

/// Index of the first row whose `field` value textually equals `val`, else `-1`.
pub fn in_list_by_field(rows: &[Row], field: &str, val: &Value) -> i32 {
    let needle = to_str(val);
    for (i, row) in rows.iter().enumerate() {
        if field_text(row, field) == needle {
            return i as i32;
        }
    }
    -1
}

/// Like [`in_list_by_field`], but projects `out_field` of the first hit.
/// Returns the empty string when nothing matches.
pub fn in_list_str(rows: &[Row], search_field: &str, val: &Value, out_field: &str) -> String {
    let needle = to_str(val);
    for row in rows {
        if field_text(row, search_field) == needle {
            return field_text(row, out_field);
        }
    }
    String::new()
}

fn field_text(row: &Row, field: &str) -> String {
    row.get(field).map(to_str).unwrap_or_default()
}
