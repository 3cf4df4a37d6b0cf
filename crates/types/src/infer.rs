use crate::data_type::DataType;
use crate::value::Value;
use std::collections::HashMap;

/// Candidate order. The first type whose cast accepts every sampled cell
/// wins; Text accepts anything, so inference always terminates.
const CANDIDATES: &[DataType] = &[
    DataType::Boolean,
    DataType::Number,
    DataType::Date,
    DataType::DateTime,
    DataType::Text,
];

/// Picks a [`DataType`] per column by sampling rows.
///
/// Columns named in `force` skip inference and use the given type verbatim.
/// `limit` caps how many rows are sampled per column.
#[derive(Debug, Clone, Default)]
pub struct TypeInferrer {
    force: HashMap<String, DataType>,
    limit: Option<usize>,
}

impl TypeInferrer {
    #[must_use]
    pub fn new() -> Self {
        TypeInferrer::default()
    }

    /// Force a specific type for a named column.
    #[must_use]
    pub fn with_force(mut self, column: impl Into<String>, data_type: DataType) -> Self {
        self.force.insert(column.into(), data_type);
        self
    }

    /// Force types for several named columns at once.
    #[must_use]
    pub fn with_forced(mut self, overrides: HashMap<String, DataType>) -> Self {
        self.force.extend(overrides);
        self
    }

    /// Sample at most `limit` rows per column.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Infer one type per column from the raw rows.
    #[must_use]
    pub fn run(&self, rows: &[Vec<Value>], column_names: &[String]) -> Vec<DataType> {
        let sample = match self.limit {
            Some(limit) => &rows[..limit.min(rows.len())],
            None => rows,
        };

        column_names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if let Some(&forced) = self.force.get(name) {
                    return forced;
                }
                Self::infer_column(sample, i)
            })
            .collect()
    }

    fn infer_column(rows: &[Vec<Value>], index: usize) -> DataType {
        for &candidate in CANDIDATES {
            let all_fit = rows
                .iter()
                .map(|row| row.get(index).unwrap_or(&Value::Null))
                .all(|cell| candidate.cast(cell).is_ok());

            if all_fit {
                return candidate;
            }
        }

        DataType::Text
    }
}
