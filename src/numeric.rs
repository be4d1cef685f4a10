//! Decimal rounding and `#`/`0`/`,`/`.` pattern formatting.
//!
//! Doubles enter [`BigDecimal`] through their shortest round-trip decimal
//! string, not their exact binary expansion. That keeps `1.005` equal to
//! `1.005`, so rounding it half-up at scale 2 gives `1.01`.

use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive};
use tracing::trace;

use crate::coerce::{to_double, to_str};
use crate::error::{ConvertError, Result};
use crate::value::Value;

/// Rounding mode of [`decimal_scale`], numbered as in the wire codes
/// callers pass around: NONE 0, DOWN 1, HALF_UP 2, UP 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Return the double unchanged, scale ignored.
    None,
    /// Truncate toward zero.
    Down,
    /// Round to nearest, ties toward positive infinity.
    HalfUp,
    /// Round away from zero.
    Up,
}

impl Rounding {
    pub fn from_code(code: i32) -> Option<Rounding> {
        match code {
            0 => Some(Rounding::None),
            1 => Some(Rounding::Down),
            2 => Some(Rounding::HalfUp),
            3 => Some(Rounding::Up),
            _ => None,
        }
    }
}

/// Rounds the numeric projection of `v` to `scale` fractional digits.
pub fn decimal_scale(v: &Value, scale: i64, mode: Rounding) -> Result<f64> {
    let d = to_double(v)?;
    if let Rounding::None = mode {
        return Ok(d);
    }
    if !d.is_finite() {
        trace!(value = d, "non-finite double passes through unscaled");
        return Ok(d);
    }
    let bd = exact(d);
    let rounded = match mode {
        Rounding::Down => bd.with_scale_round(scale, RoundingMode::Down),
        // ties go toward positive infinity: -1.5 becomes -1, 1.5 becomes 2
        Rounding::HalfUp if d < 0.0 => bd.with_scale_round(scale, RoundingMode::HalfDown),
        Rounding::HalfUp => bd.with_scale_round(scale, RoundingMode::HalfUp),
        Rounding::Up => bd.with_scale_round(scale, RoundingMode::Up),
        Rounding::None => bd,
    };
    Ok(rounded.to_f64().unwrap_or(d))
}

/// Half-up to a whole number.
pub fn half_up(v: &Value) -> Result<f64> {
    decimal_scale(v, 0, Rounding::HalfUp)
}

/// Half-up to two fractional digits.
pub fn half_up2(v: &Value) -> Result<f64> {
    decimal_scale(v, 2, Rounding::HalfUp)
}

/// Away from zero to a whole number.
pub fn round_up_whole(v: &Value) -> Result<f64> {
    decimal_scale(v, 0, Rounding::Up)
}

/// Formats the numeric projection of `v` with a decimal-format pattern built
/// from `#` (digit), `0` (forced digit), `,` (grouping) and `.` (fraction
/// separator). Excess fraction digits round half-even. An empty textual
/// projection formats as the literal `"0"`.
pub fn decimal_format(v: &Value, pattern: &str) -> Result<String> {
    if to_str(v).is_empty() {
        return Ok("0".to_owned());
    }
    let form = DecimalPattern::parse(pattern)?;
    let d = to_double(v)?;
    Ok(form.format(d))
}

/// `decimal_format` with the ubiquitous `"#,###"` pattern.
pub fn add_comma(v: &Value) -> Result<String> {
    decimal_format(v, "#,###")
}

#[derive(Debug)]
struct DecimalPattern {
    group: usize,
    min_int: usize,
    min_frac: usize,
    max_frac: usize,
}

impl DecimalPattern {
    fn parse(pattern: &str) -> Result<DecimalPattern> {
        if let Some(symbol) = pattern.chars().find(|c| !matches!(c, '#' | '0' | ',' | '.')) {
            return Err(ConvertError::Pattern {
                symbol,
                pattern: pattern.to_owned(),
            });
        }
        let (int_pat, frac_pat) = match pattern.split_once('.') {
            Some((i, f)) => (i, f),
            None => (pattern, ""),
        };
        // the last comma fixes the grouping size, as in DecimalFormat
        let group = int_pat
            .rfind(',')
            .map(|i| int_pat.len() - i - 1)
            .unwrap_or(0);
        Ok(DecimalPattern {
            group,
            min_int: int_pat.chars().filter(|c| *c == '0').count(),
            min_frac: frac_pat.chars().filter(|c| *c == '0').count(),
            max_frac: frac_pat.chars().filter(|c| matches!(c, '0' | '#')).count(),
        })
    }

    fn format(&self, d: f64) -> String {
        if !d.is_finite() {
            return d.to_string();
        }
        let rounded = exact(d).with_scale_round(self.max_frac as i64, RoundingMode::HalfEven);
        let plain = rounded.to_string();
        let unsigned = plain.strip_prefix('-').unwrap_or(&plain);
        let (int_digits, frac_digits) = match unsigned.split_once('.') {
            Some((i, f)) => (i, f),
            None => (unsigned, ""),
        };

        let mut int_part = int_digits.to_owned();
        while int_part.len() < self.min_int.max(1) {
            int_part.insert(0, '0');
        }
        if self.group > 0 {
            int_part = group_digits(&int_part, self.group);
        }

        let mut frac_part = frac_digits.to_owned();
        while frac_part.len() > self.min_frac && frac_part.ends_with('0') {
            frac_part.pop();
        }

        let mut out = String::new();
        if plain.starts_with('-') && (int_digits.chars().any(|c| c != '0') || !frac_part.is_empty())
        {
            out.push('-');
        }
        out.push_str(&int_part);
        if !frac_part.is_empty() {
            out.push('.');
            out.push_str(&frac_part);
        }
        out
    }
}

fn group_digits(digits: &str, group: usize) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / group);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % group == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// Shortest round-trip decimal form of the double. Non-finite inputs are
// handled by the callers before reaching this point.
fn exact(d: f64) -> BigDecimal {
    BigDecimal::from_str(&format!("{}", d)).unwrap_or_default()
}
