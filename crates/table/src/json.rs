//! JSON support for Table: arrays of objects in, arrays of objects out.

use crate::error::{Result, TableError};
use crate::table::Table;
use indexmap::IndexMap;
use serde_json::{Map, Number, Value as JsonValue};
use slate_types::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

impl Table {
    /// Load a table from a JSON file containing an array of objects.
    ///
    /// Column order comes from the first object; keys missing from later
    /// objects become nulls.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        Self::from_json_reader(reader)
    }

    /// Load a table from a JSON string containing an array of objects.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_json_reader(content.as_bytes())
    }

    /// Load a table from a reader containing a JSON array of objects.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let value: JsonValue = serde_json::from_reader(reader)
            .map_err(|e| TableError::Parse(format!("Invalid JSON: {e}")))?;

        let array = value
            .as_array()
            .ok_or_else(|| TableError::Parse("JSON must be an array of objects".to_string()))?;

        if array.is_empty() {
            return Table::builder(Vec::new()).build();
        }

        let first = array[0]
            .as_object()
            .ok_or_else(|| TableError::Parse("Array elements must be objects".to_string()))?;
        let column_names: Vec<String> = first.keys().cloned().collect();

        let mut raw_rows: Vec<Vec<Value>> = Vec::with_capacity(array.len());
        for (idx, item) in array.iter().enumerate() {
            let object = item.as_object().ok_or_else(|| {
                TableError::Parse(format!("Element at index {idx} must be an object"))
            })?;

            raw_rows.push(
                column_names
                    .iter()
                    .map(|name| json_to_value(object.get(name).unwrap_or(&JsonValue::Null)))
                    .collect(),
            );
        }

        Table::builder(raw_rows).column_names(column_names).build()
    }

    /// Save the table to a JSON file as an array of objects.
    pub fn to_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.write_json(writer, false)
    }

    /// Write the table to a writer as a JSON array of objects, one object
    /// per row, keys in column order.
    pub fn write_json<W: Write>(&self, writer: W, pretty: bool) -> Result<()> {
        let array: Vec<Map<String, JsonValue>> = self
            .to_records()
            .into_iter()
            .map(|record| {
                record
                    .into_iter()
                    .map(|(name, value)| (name, value_to_json(&value)))
                    .collect()
            })
            .collect();

        if pretty {
            serde_json::to_writer_pretty(writer, &array)
                .map_err(|e| TableError::Serialize(format!("JSON write error: {e}")))?;
        } else {
            serde_json::to_writer(writer, &array)
                .map_err(|e| TableError::Serialize(format!("JSON write error: {e}")))?;
        }

        Ok(())
    }

    /// Render the table as a JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_json(&mut buffer, false)?;
        String::from_utf8(buffer).map_err(|e| TableError::Serialize(e.to_string()))
    }

    /// Build a table from a list of records (ordered maps of column name
    /// to value). Column order comes from the first record.
    pub fn from_records(records: Vec<IndexMap<String, Value>>) -> Result<Self> {
        let Some(first) = records.first() else {
            return Table::builder(Vec::new()).build();
        };

        let column_names: Vec<String> = first.keys().cloned().collect();
        let raw_rows: Vec<Vec<Value>> = records
            .iter()
            .map(|record| {
                column_names
                    .iter()
                    .map(|name| record.get(name).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Table::builder(raw_rows).column_names(column_names).build()
    }
}

fn json_to_value(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        JsonValue::String(s) => Value::Text(s.clone()),
        other => Value::Text(other.to_string()),
    }
}

fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(i) => JsonValue::Number((*i).into()),
        Value::Float(f) => Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number),
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::Date(_) | Value::DateTime(_) => JsonValue::String(value.as_str()),
    }
}
