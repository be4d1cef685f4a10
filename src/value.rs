// used to print out readable forms of a value
use std::fmt;

use std::collections::BTreeMap;

/// A heterogeneous row, as produced by query layers and JSON objects.
pub type Row = BTreeMap<String, Value>;

/// A loosely typed input value.
///
/// Every coercion helper in this crate takes a [`Value`] and works off its
/// *textual projection*: the canonical string form given by the `Display`
/// impl, which is empty for [`Value::Absent`]. The variants cover the input
/// shapes the helpers care about; a fixed-length array and an ordered
/// sequence both map onto [`Value::Seq`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Absent,
    Text(String),
    Int(i64),
    Float(f64),
    Seq(Vec<Value>),
    Map(Row),
}

impl Value {
    /// True for absent values, whitespace-only text and zero-length
    /// sequences or mappings. Non-empty scalars are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Absent => true,
            Value::Text(s) => s.trim().is_empty(),
            Value::Seq(seq) => seq.is_empty(),
            Value::Map(map) => map.is_empty(),
            _ => false,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Absent => Ok(()),
            Value::Text(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(d) => write!(f, "{}", d),
            Value::Seq(seq) => {
                write!(f, "[")?;
                for (i, v) in seq.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.to_owned())
    }
}
impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Text(s)
    }
}
impl From<i32> for Value {
    fn from(i: i32) -> Value {
        Value::Int(i as i64)
    }
}
impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Int(i)
    }
}
impl From<f64> for Value {
    fn from(d: f64) -> Value {
        Value::Float(d)
    }
}
impl From<Vec<Value>> for Value {
    fn from(seq: Vec<Value>) -> Value {
        Value::Seq(seq)
    }
}
impl From<Vec<String>> for Value {
    fn from(seq: Vec<String>) -> Value {
        Value::Seq(seq.into_iter().map(Value::Text).collect())
    }
}
impl From<Row> for Value {
    fn from(map: Row) -> Value {
        Value::Map(map)
    }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Value {
        match opt {
            Some(v) => v.into(),
            None => Value::Absent,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::Bool(b) => Value::Text(b.to_string()),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(seq) => {
                Value::Seq(seq.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}
