use konvert::member::{in_array, in_list, in_list_by_field, in_list_str};
use konvert::value::{Row, Value};

fn rows() -> Vec<Row> {
    let mut apple = Row::new();
    apple.insert("code".to_owned(), Value::from("A"));
    apple.insert("name".to_owned(), Value::from("apple"));
    let mut banana = Row::new();
    banana.insert("code".to_owned(), Value::from(7));
    banana.insert("name".to_owned(), Value::from("banana"));
    vec![apple, banana]
}

#[test]
fn array_scan() {
    let arr = ["red", "green", "blue"];
    assert_eq!(in_array(Some(&arr[..]), &Value::from("green")), 1);
    assert_eq!(in_array(Some(&arr[..]), &Value::from("GREEN")), -1);
    assert_eq!(in_array::<&str>(None, &Value::from("red")), -1);
    // the needle is projected, so a numeric value matches its text form
    let nums = ["1", "2", "3"];
    assert_eq!(in_array(Some(&nums[..]), &Value::from(2)), 1);
}

#[test]
fn list_scan_is_textual() {
    let seq = vec![Value::from("foo"), Value::from(42), Value::Absent];
    assert_eq!(in_list(&seq, &Value::from("42")), 1);
    assert_eq!(in_list(&seq, &Value::from("foo")), 0);
    assert_eq!(in_list(&seq, &Value::from("bar")), -1);
    // absent projects to empty text on both sides and matches itself
    assert_eq!(in_list(&seq, &Value::Absent), 2);
    assert_eq!(in_list(&[], &Value::from("x")), -1);
}

#[test]
fn first_match_wins() {
    let seq = vec![Value::from("dup"), Value::from("dup")];
    assert_eq!(in_list(&seq, &Value::from("dup")), 0);
}

#[test]
fn row_scan_by_field() {
    let rows = rows();
    assert_eq!(in_list_by_field(&rows, "code", &Value::from("A")), 0);
    // typed 7 and textual "7" are the same field value
    assert_eq!(in_list_by_field(&rows, "code", &Value::from("7")), 1);
    assert_eq!(in_list_by_field(&rows, "code", &Value::from("Z")), -1);
    assert_eq!(in_list_by_field(&rows, "missing", &Value::from("A")), -1);
    assert_eq!(in_list_by_field(&[], "code", &Value::from("A")), -1);
}

#[test]
fn row_projection() {
    let rows = rows();
    assert_eq!(in_list_str(&rows, "code", &Value::from("A"), "name"), "apple");
    assert_eq!(in_list_str(&rows, "code", &Value::from(7), "name"), "banana");
    assert_eq!(in_list_str(&rows, "code", &Value::from("Z"), "name"), "");
    assert_eq!(in_list_str(&rows, "code", &Value::from("A"), "missing"), "");
}
