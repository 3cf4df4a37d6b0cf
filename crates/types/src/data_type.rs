use crate::error::CastError;
use crate::value::Value;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strings that cast to null for every data type.
const NULL_VALUES: &[&str] = &["", "na", "n/a", "none", "null", "."];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
];

/// The casting capability for one column.
///
/// Each variant knows how to coerce a raw [`Value`] into its canonical typed
/// form. Casting happens exactly once per cell, during validated table
/// construction; forked tables never re-cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    Boolean,
    Number,
    Date,
    DateTime,
    Text,
}

impl DataType {
    /// Cast a raw value to this type's canonical form.
    ///
    /// Null and null-marker strings ("", "na", "null", ...) cast to
    /// [`Value::Null`] for every type.
    pub fn cast(&self, raw: &Value) -> Result<Value, CastError> {
        if raw.is_null() {
            return Ok(Value::Null);
        }
        if let Value::Text(s) = raw {
            if NULL_VALUES.contains(&s.trim().to_lowercase().as_str()) {
                return Ok(Value::Null);
            }
        }

        match self {
            DataType::Boolean => Self::cast_boolean(raw),
            DataType::Number => Self::cast_number(raw),
            DataType::Date => Self::cast_date(raw),
            DataType::DateTime => Self::cast_datetime(raw),
            DataType::Text => Ok(Value::Text(raw.as_str())),
        }
    }

    fn cast_boolean(raw: &Value) -> Result<Value, CastError> {
        match raw {
            Value::Bool(b) => Ok(Value::Bool(*b)),
            Value::Int(0) => Ok(Value::Bool(false)),
            Value::Int(1) => Ok(Value::Bool(true)),
            Value::Text(s) => match s.trim().to_lowercase().as_str() {
                "true" | "yes" | "t" | "y" | "1" => Ok(Value::Bool(true)),
                "false" | "no" | "f" | "n" | "0" => Ok(Value::Bool(false)),
                _ => Err(CastError::new(s.clone(), "Boolean")),
            },
            other => Err(CastError::new(other.as_str(), "Boolean")),
        }
    }

    fn cast_number(raw: &Value) -> Result<Value, CastError> {
        match raw {
            Value::Int(i) => Ok(Value::Int(*i)),
            Value::Float(f) => Ok(Value::Float(*f)),
            Value::Bool(b) => Ok(Value::Int(i64::from(*b))),
            Value::Text(s) => {
                let trimmed = s.trim().replace(',', "");
                if let Ok(i) = trimmed.parse::<i64>() {
                    Ok(Value::Int(i))
                } else if let Ok(f) = trimmed.parse::<f64>() {
                    Ok(Value::Float(f))
                } else {
                    Err(CastError::new(s.clone(), "Number"))
                }
            }
            other => Err(CastError::new(other.as_str(), "Number")),
        }
    }

    fn cast_date(raw: &Value) -> Result<Value, CastError> {
        match raw {
            Value::Date(d) => Ok(Value::Date(*d)),
            Value::DateTime(dt) => Ok(Value::Date(dt.date())),
            Value::Text(s) => {
                let trimmed = s.trim();
                for format in DATE_FORMATS {
                    if let Ok(d) = NaiveDate::parse_from_str(trimmed, format) {
                        return Ok(Value::Date(d));
                    }
                }
                Err(CastError::new(s.clone(), "Date"))
            }
            other => Err(CastError::new(other.as_str(), "Date")),
        }
    }

    fn cast_datetime(raw: &Value) -> Result<Value, CastError> {
        match raw {
            Value::DateTime(dt) => Ok(Value::DateTime(*dt)),
            Value::Date(d) => Ok(Value::DateTime(
                d.and_hms_opt(0, 0, 0).unwrap_or_default(),
            )),
            Value::Text(s) => {
                let trimmed = s.trim();
                for format in DATETIME_FORMATS {
                    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
                        return Ok(Value::DateTime(dt));
                    }
                }
                Err(CastError::new(s.clone(), "DateTime"))
            }
            other => Err(CastError::new(other.as_str(), "DateTime")),
        }
    }

    /// Short name used in error messages and structure printouts.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Boolean => "Boolean",
            DataType::Number => "Number",
            DataType::Date => "Date",
            DataType::DateTime => "DateTime",
            DataType::Text => "Text",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
