use chrono::{NaiveDate, NaiveDateTime};
use konvert::calendar::{
    date_to_str, date_to_str_default, now_to_str, to_date, to_date_default, to_local_date,
    week_name, week_num, week_num_str,
};
use konvert::value::Value;

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[test]
fn formats_with_pattern() {
    let date = dt(2024, 6, 9, 15, 4, 5);
    assert_eq!(
        date_to_str("yyyy-MM-dd HH:mm:ss", Some(date)).unwrap(),
        "2024-06-09 15:04:05"
    );
    assert_eq!(date_to_str("yyyyMMdd", Some(date)).unwrap(), "20240609");
    assert_eq!(date_to_str_default(Some(date)), "2024-06-09");
    assert_eq!(date_to_str("yyyy-MM-dd", None).unwrap(), "");
}

#[test]
fn korean_locale_shows_in_text_fields() {
    // 2024-06-09 is a Sunday
    let date = dt(2024, 6, 9, 0, 0, 0);
    assert_eq!(date_to_str("E", Some(date)).unwrap(), "일");
    assert_eq!(date_to_str("EEEE", Some(date)).unwrap(), "일요일");
}

#[test]
fn text_field_patterns_round_trip() {
    let date = dt(2024, 6, 9, 0, 0, 0);
    for pattern in ["yyyy-MM-dd E", "yyyy-MM-dd EEEE"] {
        let text = date_to_str(pattern, Some(date)).unwrap();
        assert_eq!(
            to_date(&Value::from(text.clone()), pattern).unwrap(),
            date,
            "pattern {} via {}",
            pattern,
            text
        );
    }
    assert_eq!(
        date_to_str("yyyy-MM-dd E", Some(date)).unwrap(),
        "2024-06-09 일"
    );
    // the meridiem field round-trips the same way
    let noonish = dt(2024, 6, 9, 15, 30, 0);
    let text = date_to_str("yyyy-MM-dd a HH:mm", Some(noonish)).unwrap();
    assert_eq!(text, "2024-06-09 오후 15:30");
    assert_eq!(
        to_date(&Value::from(text), "yyyy-MM-dd a HH:mm").unwrap(),
        noonish
    );
}

#[test]
fn rejects_unknown_pattern_letters() {
    let date = dt(2024, 6, 9, 0, 0, 0);
    assert!(date_to_str("yyyy-QQ", Some(date)).is_err());
    assert!(to_date(&Value::from("2024-01"), "yyyy-Q").is_err());
}

#[test]
fn parses_with_pattern() {
    assert_eq!(
        to_date_default(&Value::from("2024-06-09")).unwrap(),
        dt(2024, 6, 9, 0, 0, 0)
    );
    assert_eq!(
        to_date(&Value::from("20240609 150405"), "yyyyMMdd HHmmss").unwrap(),
        dt(2024, 6, 9, 15, 4, 5)
    );
    // fields the pattern leaves out resolve to the epoch date / midnight
    assert_eq!(
        to_date(&Value::from("15:30"), "HH:mm").unwrap(),
        dt(1970, 1, 1, 15, 30, 0)
    );
}

#[test]
fn parse_failures_surface() {
    assert!(to_date_default(&Value::from("2024-13-01")).is_err());
    assert!(to_date_default(&Value::from("not a date")).is_err());
    assert!(to_date(&Value::from("2024-06-09"), "yyyyMMdd").is_err());
    assert!(to_date_default(&Value::Absent).is_err());
}

#[test]
fn round_trips_through_text() {
    let date = dt(2024, 2, 29, 23, 59, 58);
    let pattern = "yyyy-MM-dd HH:mm:ss";
    let text = date_to_str(pattern, Some(date)).unwrap();
    assert_eq!(to_date(&Value::from(text), pattern).unwrap(), date);
}

#[test]
fn current_instant_formats() {
    let year = now_to_str("yyyy").unwrap();
    assert_eq!(year.len(), 4);
    assert!(year.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn weekday_numbering_is_sunday_first() {
    assert_eq!(week_num(dt(2024, 6, 9, 0, 0, 0)), 1); // Sunday
    assert_eq!(week_num(dt(2024, 6, 10, 0, 0, 0)), 2); // Monday
    assert_eq!(week_num(dt(2024, 6, 15, 0, 0, 0)), 7); // Saturday
    assert_eq!(week_num_str("2024-06-09", "yyyy-MM-dd").unwrap(), 1);
}

#[test]
fn weekday_names_are_korean() {
    let names: Vec<&str> = (9..16)
        .map(|d| week_name(dt(2024, 6, d, 0, 0, 0)))
        .collect();
    assert_eq!(names, vec!["일", "월", "화", "수", "목", "금", "토"]);
}

#[test]
fn date_only_projection() {
    let date = dt(2024, 6, 9, 15, 4, 5);
    assert_eq!(
        to_local_date(date),
        NaiveDate::from_ymd_opt(2024, 6, 9).unwrap()
    );
}
