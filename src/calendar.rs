//! Date parsing, formatting and calendar arithmetic.
//!
//! Patterns use the calendar-field letters `y M d H m s` (plus `E` for the
//! weekday name and `a` for am/pm) and are translated to strftime items
//! internally. Formatting is fixed to the Korean locale, which becomes
//! observable as soon as a pattern contains a text field. The working type
//! is [`NaiveDateTime`] in the process-local wall clock; no time zone
//! conversion is performed, so day and minute differences ignore
//! daylight-saving transitions (a fixed-offset assumption that holds for
//! the Korean locale).

use chrono::format::{DelayedFormat, Parsed, StrftimeItems, parse};
use chrono::{Datelike, Duration, Local, Locale, Months, NaiveDate, NaiveDateTime};
use tracing::trace;

use crate::coerce::to_str;
use crate::error::{ConvertError, Result};
use crate::value::Value;

pub const DEFAULT_DATE_PATTERN: &str = "yyyy-MM-dd";

const LOCALE: Locale = Locale::ko_KR;

/// Calendar field selector of [`date_add`], numbered with the classic
/// calendar field codes: year 1, month 2, day-of-month 5, day-of-week 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Year,
    Month,
    Day,
    WeekDay,
}

impl DateField {
    pub fn from_code(code: i32) -> Option<DateField> {
        match code {
            1 => Some(DateField::Year),
            2 => Some(DateField::Month),
            5 => Some(DateField::Day),
            7 => Some(DateField::WeekDay),
            _ => None,
        }
    }
}

/// Unit selector of [`date_diff`]: `"Y"`, `"M"`, `"D"` or `"m"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffUnit {
    Years,
    Months,
    Days,
    Minutes,
}

impl DiffUnit {
    pub fn from_selector(selector: &str) -> Option<DiffUnit> {
        match selector {
            "Y" => Some(DiffUnit::Years),
            "M" => Some(DiffUnit::Months),
            "D" => Some(DiffUnit::Days),
            "m" => Some(DiffUnit::Minutes),
            _ => None,
        }
    }
}

/// Formats `date` with `pattern`; an absent date formats to `""`.
pub fn date_to_str(pattern: &str, date: Option<NaiveDateTime>) -> Result<String> {
    let Some(date) = date else {
        return Ok(String::new());
    };
    let fmt = strftime_pattern(pattern)?;
    let formatted = DelayedFormat::new_with_locale(
        Some(date.date()),
        Some(date.time()),
        StrftimeItems::new(&fmt),
        LOCALE,
    );
    Ok(formatted.to_string())
}

/// Formats the current wall-clock instant with `pattern`.
pub fn now_to_str(pattern: &str) -> Result<String> {
    date_to_str(pattern, Some(Local::now().naive_local()))
}

/// Formats `date` with the default `yyyy-MM-dd` pattern.
pub fn date_to_str_default(date: Option<NaiveDateTime>) -> String {
    date_to_str(DEFAULT_DATE_PATTERN, date).unwrap_or_default()
}

/// Strictly parses the textual projection of `v` under `pattern`.
/// Text fields accept the Korean names the formatter emits, so anything
/// [`date_to_str`] produces parses back under the same pattern. Fields the
/// pattern leaves out resolve to the epoch date and midnight.
pub fn to_date(v: &Value, pattern: &str) -> Result<NaiveDateTime> {
    let fmt = strftime_pattern(pattern)?;
    let text = delocalize(&to_str(v), &fmt);
    let mut parsed = Parsed::new();
    parse(&mut parsed, &text, StrftimeItems::new(&fmt)).map_err(|source| ConvertError::Date {
        text: text.clone(),
        pattern: pattern.to_owned(),
        source,
    })?;
    // backfill only when the pattern left the date or time incomplete;
    // set_* rejects conflicts with already parsed fields, so a partial
    // backfill keeps whatever the text did provide
    let date = parsed.to_naive_date().unwrap_or_else(|_| {
        let _ = parsed.set_year(1970);
        let _ = parsed.set_month(1);
        let _ = parsed.set_day(1);
        parsed.to_naive_date().unwrap_or_default()
    });
    let time = parsed.to_naive_time().unwrap_or_else(|_| {
        let _ = parsed.set_hour(0);
        let _ = parsed.set_minute(0);
        let _ = parsed.set_second(0);
        parsed.to_naive_time().unwrap_or_default()
    });
    Ok(date.and_time(time))
}

/// [`to_date`] with the default `yyyy-MM-dd` pattern.
pub fn to_date_default(v: &Value) -> Result<NaiveDateTime> {
    to_date(v, DEFAULT_DATE_PATTERN)
}

/// Date-only projection of a date-time.
pub fn to_local_date(date: NaiveDateTime) -> NaiveDate {
    date.date()
}

/// Adds `n` (possibly negative) to one calendar field of `date`. Month and
/// year steps clamp the day-of-month to the last valid day of the target
/// month; week-day steps are plain day addition.
pub fn date_add(date: NaiveDateTime, field: DateField, n: i32) -> NaiveDateTime {
    let shifted = match field {
        DateField::Year => shift_months(date, n as i64 * 12),
        DateField::Month => shift_months(date, n as i64),
        DateField::Day | DateField::WeekDay => date.checked_add_signed(Duration::days(n as i64)),
    };
    match shifted {
        Some(d) => d,
        None => {
            trace!(?date, ?field, n, "calendar shift out of range");
            date
        }
    }
}

fn shift_months(date: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new((-months) as u32))
    }
}

/// Difference `b - a` in the given unit. Years and months are calendar-field
/// differences; days and minutes are elapsed-time quotients truncated toward
/// zero. An unknown selector yields `0`.
pub fn date_diff(a: NaiveDateTime, b: NaiveDateTime, unit: &str) -> i64 {
    match DiffUnit::from_selector(unit) {
        Some(DiffUnit::Years) => (b.year() - a.year()) as i64,
        Some(DiffUnit::Months) => {
            let ma = 12 * a.year() as i64 + a.month() as i64;
            let mb = 12 * b.year() as i64 + b.month() as i64;
            mb - ma
        }
        Some(DiffUnit::Days) => (b - a).num_days(),
        Some(DiffUnit::Minutes) => (b - a).num_minutes(),
        None => 0,
    }
}

/// [`date_diff`] over textual dates in the default `yyyy-MM-dd` pattern.
pub fn date_diff_str(a: &str, b: &str, unit: &str) -> Result<i64> {
    date_diff_str_with(a, DEFAULT_DATE_PATTERN, b, DEFAULT_DATE_PATTERN, unit)
}

/// [`date_diff`] over textual dates, each parsed under its own pattern.
pub fn date_diff_str_with(
    a: &str,
    a_pattern: &str,
    b: &str,
    b_pattern: &str,
    unit: &str,
) -> Result<i64> {
    let a = to_date(&Value::from(a), a_pattern)?;
    let b = to_date(&Value::from(b), b_pattern)?;
    Ok(date_diff(a, b, unit))
}

/// Weekday number in the Sunday-first convention: 1 Sunday .. 7 Saturday.
pub fn week_num(date: NaiveDateTime) -> u32 {
    date.weekday().num_days_from_sunday() + 1
}

/// [`week_num`] of a textual date parsed under `pattern`.
pub fn week_num_str(text: &str, pattern: &str) -> Result<u32> {
    Ok(week_num(to_date(&Value::from(text), pattern)?))
}

/// One-character Korean day name, 일 for Sunday through 토 for Saturday.
pub fn week_name(date: NaiveDateTime) -> &'static str {
    match week_num(date) {
        1 => "일",
        2 => "월",
        3 => "화",
        4 => "수",
        5 => "목",
        6 => "금",
        _ => "토",
    }
}

// Korean names as the ko_KR locale emits them, longest form first so a
// full day name is not clobbered by its one-character prefix.
const DAY_NAMES: [(&str, &str); 14] = [
    ("일요일", "Sunday"),
    ("월요일", "Monday"),
    ("화요일", "Tuesday"),
    ("수요일", "Wednesday"),
    ("목요일", "Thursday"),
    ("금요일", "Friday"),
    ("토요일", "Saturday"),
    ("일", "Sun"),
    ("월", "Mon"),
    ("화", "Tue"),
    ("수", "Wed"),
    ("목", "Thu"),
    ("금", "Fri"),
    ("토", "Sat"),
];
const MERIDIEM_NAMES: [(&str, &str); 2] = [("오전", "AM"), ("오후", "PM")];

// The parser behind [`to_date`] only knows the English day and meridiem
// names, so the Korean forms the formatter emits are mapped back first,
// but only for the text fields the pattern actually contains.
fn delocalize(text: &str, fmt: &str) -> String {
    let mut out = text.to_owned();
    if fmt.contains("%a") || fmt.contains("%A") {
        for (korean, english) in &DAY_NAMES {
            if out.contains(korean) {
                out = out.replace(korean, english);
            }
        }
    }
    if fmt.contains("%p") {
        for (korean, english) in &MERIDIEM_NAMES {
            if out.contains(korean) {
                out = out.replace(korean, english);
            }
        }
    }
    out
}

// Translates runs of calendar-field letters into strftime items. Literal
// separators pass through, with '%' escaped. Unknown field letters are
// rejected rather than guessed at.
fn strftime_pattern(pattern: &str) -> Result<String> {
    let mut out = String::with_capacity(pattern.len());
    let chars: Vec<char> = pattern.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let mut run = 1;
        while i + run < chars.len() && chars[i + run] == c {
            run += 1;
        }
        match c {
            'y' => out.push_str(if run == 2 { "%y" } else { "%Y" }),
            'M' => out.push_str(match run {
                1 => "%-m",
                2 => "%m",
                3 => "%b",
                _ => "%B",
            }),
            'd' => out.push_str(if run == 1 { "%-d" } else { "%d" }),
            'H' => out.push_str(if run == 1 { "%-H" } else { "%H" }),
            'm' => out.push_str(if run == 1 { "%-M" } else { "%M" }),
            's' => out.push_str(if run == 1 { "%-S" } else { "%S" }),
            'E' => out.push_str(if run >= 4 { "%A" } else { "%a" }),
            'a' => out.push_str("%p"),
            '%' => {
                for _ in 0..run {
                    out.push_str("%%");
                }
            }
            _ if c.is_ascii_alphabetic() => {
                return Err(ConvertError::Pattern {
                    symbol: c,
                    pattern: pattern.to_owned(),
                });
            }
            _ => {
                for _ in 0..run {
                    out.push(c);
                }
            }
        }
        i += run;
    }
    Ok(out)
}
