//! Tagged argument types for the transformation operators.
//!
//! Operators accept column names, name sequences or row functions
//! interchangeably; each flavor is resolved into one of these enums at the
//! top of the operator instead of being sniffed mid-algorithm. `From`
//! conversions keep call sites terse: `table.select("name")`,
//! `table.order_by(["last", "first"], false)`.

use crate::row::Row;
use slate_types::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Column selection for `select` / `exclude`: one name or an ordered list.
#[derive(Debug, Clone)]
pub enum Keys {
    One(String),
    Many(Vec<String>),
}

impl Keys {
    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        match self {
            Keys::One(name) => vec![name],
            Keys::Many(names) => names,
        }
    }
}

impl From<&str> for Keys {
    fn from(name: &str) -> Self {
        Keys::One(name.to_string())
    }
}

impl From<String> for Keys {
    fn from(name: String) -> Self {
        Keys::One(name)
    }
}

impl From<Vec<String>> for Keys {
    fn from(names: Vec<String>) -> Self {
        Keys::Many(names)
    }
}

impl From<Vec<&str>> for Keys {
    fn from(names: Vec<&str>) -> Self {
        Keys::Many(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Keys {
    fn from(names: &[&str]) -> Self {
        Keys::Many(names.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Keys {
    fn from(names: [&str; N]) -> Self {
        Keys::Many(names.iter().map(|s| (*s).to_string()).collect())
    }
}

/// Sort/dedup key for `order_by` / `distinct_by`: a column, a composite of
/// columns compared lexicographically, or a function of the whole row.
#[derive(Clone)]
pub enum RowKey {
    Column(String),
    Columns(Vec<String>),
    Function(Arc<dyn Fn(&Row) -> Value>),
}

impl RowKey {
    /// Wrap a row function as a key.
    pub fn function(f: impl Fn(&Row) -> Value + 'static) -> Self {
        RowKey::Function(Arc::new(f))
    }
}

impl std::fmt::Debug for RowKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowKey::Column(name) => f.debug_tuple("Column").field(name).finish(),
            RowKey::Columns(names) => f.debug_tuple("Columns").field(names).finish(),
            RowKey::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl From<&str> for RowKey {
    fn from(name: &str) -> Self {
        RowKey::Column(name.to_string())
    }
}

impl From<String> for RowKey {
    fn from(name: String) -> Self {
        RowKey::Column(name)
    }
}

impl From<Vec<String>> for RowKey {
    fn from(names: Vec<String>) -> Self {
        RowKey::Columns(names)
    }
}

impl From<Vec<&str>> for RowKey {
    fn from(names: Vec<&str>) -> Self {
        RowKey::Columns(names.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RowKey {
    fn from(names: [&str; N]) -> Self {
        RowKey::Columns(names.iter().map(|s| (*s).to_string()).collect())
    }
}

/// How row names are computed at construction time: from a column's cells,
/// from a function of each row, or given verbatim.
#[derive(Clone)]
pub enum RowNames {
    Column(String),
    Function(Arc<dyn Fn(&Row) -> Value>),
    Sequence(Vec<Value>),
}

impl RowNames {
    /// Name each row with the result of a row function.
    pub fn function(f: impl Fn(&Row) -> Value + 'static) -> Self {
        RowNames::Function(Arc::new(f))
    }
}

impl std::fmt::Debug for RowNames {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowNames::Column(name) => f.debug_tuple("Column").field(name).finish(),
            RowNames::Function(_) => f.write_str("Function(..)"),
            RowNames::Sequence(names) => f.debug_tuple("Sequence").field(names).finish(),
        }
    }
}

impl From<&str> for RowNames {
    fn from(column: &str) -> Self {
        RowNames::Column(column.to_string())
    }
}

impl From<String> for RowNames {
    fn from(column: String) -> Self {
        RowNames::Column(column)
    }
}

impl From<Vec<Value>> for RowNames {
    fn from(names: Vec<Value>) -> Self {
        RowNames::Sequence(names)
    }
}

/// Column rename specification: a full replacement list or a partial map
/// from old name to new name (unmapped names are left unchanged).
#[derive(Debug, Clone)]
pub enum NameMapping {
    Full(Vec<String>),
    Partial(HashMap<String, String>),
}

impl From<Vec<String>> for NameMapping {
    fn from(names: Vec<String>) -> Self {
        NameMapping::Full(names)
    }
}

impl From<Vec<&str>> for NameMapping {
    fn from(names: Vec<&str>) -> Self {
        NameMapping::Full(names.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for NameMapping {
    fn from(names: [&str; N]) -> Self {
        NameMapping::Full(names.iter().map(|s| (*s).to_string()).collect())
    }
}

impl From<HashMap<String, String>> for NameMapping {
    fn from(mapping: HashMap<String, String>) -> Self {
        NameMapping::Partial(mapping)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for NameMapping {
    fn from(pairs: [(&str, &str); N]) -> Self {
        NameMapping::Partial(
            pairs
                .iter()
                .map(|(old, new)| ((*old).to_string(), (*new).to_string()))
                .collect(),
        )
    }
}

/// Row-name rename specification. Partial mappings pair old names with
/// replacements; old names absent from the table are ignored.
#[derive(Debug, Clone)]
pub enum RowNameMapping {
    Full(Vec<Value>),
    Partial(Vec<(Value, Value)>),
}

impl From<Vec<Value>> for RowNameMapping {
    fn from(names: Vec<Value>) -> Self {
        RowNameMapping::Full(names)
    }
}

impl From<Vec<(Value, Value)>> for RowNameMapping {
    fn from(pairs: Vec<(Value, Value)>) -> Self {
        RowNameMapping::Partial(pairs)
    }
}
