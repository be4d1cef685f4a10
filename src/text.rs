//! Padding and filename helpers.

use crate::coerce::to_str;
use crate::value::Value;

/// Left-pads the textual projection with `"0"` up to `width`.
pub fn lpad(v: &Value, width: usize) -> String {
    lpad_with(v, width, "0")
}

/// Left-pads with `pad` until the projection reaches `width` characters.
/// `pad` is prepended verbatim once per missing character, so a
/// multi-character pad overshoots `width`; callers pass single characters.
pub fn lpad_with(v: &Value, width: usize, pad: &str) -> String {
    let val = to_str(v);
    let len = val.chars().count();
    if len >= width {
        return val;
    }
    let mut res = val;
    for _ in len..width {
        res.insert_str(0, pad);
    }
    res
}

/// Upper-cased substring after the final `.` of a filename.
/// Empty input gives the empty string; a name without any `.` comes back
/// whole and upper-cased, a consequence of splitting on `.`.
pub fn file_ext(v: &Value) -> String {
    let name = to_str(v);
    if name.is_empty() {
        return name;
    }
    // trailing empty segments drop out, so "file." still yields "FILE"
    let mut parts: Vec<&str> = name.split('.').collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    match parts.last() {
        Some(ext) => ext.to_uppercase(),
        None => String::new(),
    }
}
