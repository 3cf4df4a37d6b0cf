use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A single typed cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Value {
    /// Check if the value is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get the value as a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Int(i) => Some(*i != 0),
            Value::Float(f) => Some(*f != 0.0),
            Value::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Try to get the value as an integer.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(f) => Some(*f as i64),
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Try to get the value as a float.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Get the value as a string.
    #[must_use]
    pub fn as_str(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Text(s) => s.clone(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
            Value::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }

    /// Parse a string into a `Value` with type inference.
    /// Tries: null -> bool -> int -> float -> string.
    #[must_use]
    pub fn parse(s: &str) -> Value {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Value::Null;
        }

        match trimmed.to_lowercase().as_str() {
            "true" | "yes" => return Value::Bool(true),
            "false" | "no" => return Value::Bool(false),
            _ => {}
        }

        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Int(i);
        }

        if let Ok(f) = trimmed.parse::<f64>() {
            return Value::Float(f);
        }

        Value::Text(s.to_string())
    }

    /// Total ordering over values.
    ///
    /// Null sorts strictly below every non-null value and equal only to
    /// itself, so ascending sorts place nulls first and descending sorts
    /// place them last. Int and Float compare numerically with each other;
    /// otherwise values of different variants compare by variant rank.
    #[must_use]
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Null, _) => Ordering::Less,
            (_, Value::Null) => Ordering::Greater,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Int(a), Value::Float(b)) => (*a as f64).total_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.total_cmp(&(*b as f64)),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Date(a), Value::Date(b)) => a.cmp(b),
            (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
            (Value::Date(a), Value::DateTime(b)) => a.and_hms_opt(0, 0, 0).unwrap_or_default().cmp(b),
            (Value::DateTime(a), Value::Date(b)) => {
                a.cmp(&b.and_hms_opt(0, 0, 0).unwrap_or_default())
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::Text(_) => 3,
            Value::Date(_) | Value::DateTime(_) => 4,
        }
    }

    /// Canonical string key for value equality.
    ///
    /// Distinct variants never collide (each is tagged), and `1` and `1.0`
    /// map to different keys. Used for dedup sets and row-name lookup maps,
    /// which keeps `Hash`/`Eq` off the float-carrying enum.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Value::Null => "N".to_string(),
            Value::Bool(b) => format!("B{b}"),
            Value::Int(i) => format!("I{i}"),
            Value::Float(f) => format!("F{f:?}"),
            Value::Text(s) => format!("S{s}"),
            Value::Date(d) => format!("D{d}"),
            Value::DateTime(dt) => format!("T{dt}"),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, ""),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(fl) => write!(f, "{fl}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_null() {
        assert_eq!(Value::parse(""), Value::Null);
        assert_eq!(Value::parse("  "), Value::Null);
    }

    #[test]
    fn test_parse_scalars() {
        assert_eq!(Value::parse("true"), Value::Bool(true));
        assert_eq!(Value::parse("no"), Value::Bool(false));
        assert_eq!(Value::parse("42"), Value::Int(42));
        assert_eq!(Value::parse("-2.5"), Value::Float(-2.5));
        assert_eq!(Value::parse("hello"), Value::Text("hello".to_string()));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Value::Int(42).as_float(), Some(42.0));
        assert_eq!(Value::Bool(true).as_int(), Some(1));
        assert_eq!(Value::Text("42".to_string()).as_int(), Some(42));
        assert_eq!(Value::Null.as_int(), None);
    }

    #[test]
    fn test_null_sorts_below_everything() {
        for v in [
            Value::Bool(false),
            Value::Int(i64::MIN),
            Value::Float(f64::NEG_INFINITY),
            Value::Text(String::new()),
        ] {
            assert_eq!(Value::Null.compare(&v), Ordering::Less);
            assert_eq!(v.compare(&Value::Null), Ordering::Greater);
        }
        assert_eq!(Value::Null.compare(&Value::Null), Ordering::Equal);
    }

    #[test]
    fn test_numeric_compare_across_variants() {
        assert_eq!(Value::Int(2).compare(&Value::Float(2.5)), Ordering::Less);
        assert_eq!(Value::Float(3.0).compare(&Value::Int(3)), Ordering::Equal);
    }

    #[test]
    fn test_keys_distinguish_variants() {
        assert_ne!(Value::Int(1).key(), Value::Float(1.0).key());
        assert_ne!(Value::Text("1".to_string()).key(), Value::Int(1).key());
        assert_eq!(Value::Int(1).key(), Value::Int(1).key());
    }
}
