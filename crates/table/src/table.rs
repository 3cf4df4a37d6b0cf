use crate::column::Column;
use crate::error::{Result, TableError};
use crate::header::{letter_name, Header};
use crate::keys::{Keys, NameMapping, RowKey, RowNameMapping, RowNames};
use crate::mapped_sequence::MappedSequence;
use crate::row::Row;
use crate::warn::Warning;
use indexmap::IndexMap;
use slate_types::{DataType, TypeInferrer, Value};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// An immutable dataset of typed rows and columns.
///
/// Tables are built once, through [`Table::builder`], which validates
/// names, resolves types and casts every cell, and never mutated. Every
/// transformation operator returns a new table produced through
/// [`Table::fork`], sharing row storage with the receiver.
///
/// Rows are addressable by position or, when row names are set, by name.
/// Columns are addressable by position or by their (unique) names.
#[derive(Debug, Clone)]
pub struct Table {
    header: Arc<Header>,
    column_types: Arc<Vec<DataType>>,
    rows: MappedSequence<Row>,
    columns: MappedSequence<Column>,
    row_names: Option<Arc<Vec<Value>>>,
    warnings: Vec<Warning>,
}

/// Staged construction arguments for [`Table`]; see [`Table::builder`].
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    raw_rows: Vec<Vec<Value>>,
    column_names: Option<Vec<Option<String>>>,
    column_types: Option<Vec<DataType>>,
    type_overrides: HashMap<String, DataType>,
    sample_limit: Option<usize>,
    row_names: Option<RowNames>,
}

impl TableBuilder {
    /// Column names, all present. Missing names are allowed through
    /// [`TableBuilder::column_names_opt`].
    #[must_use]
    pub fn column_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_names = Some(names.into_iter().map(|n| Some(n.into())).collect());
        self
    }

    /// Column names where `None` entries receive letter placeholders
    /// (with a recorded warning).
    #[must_use]
    pub fn column_names_opt(mut self, names: Vec<Option<String>>) -> Self {
        self.column_names = Some(names);
        self
    }

    /// Explicit column types, one per column. Skips inference entirely;
    /// the length must match the resolved column names.
    #[must_use]
    pub fn column_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = DataType>,
    {
        self.column_types = Some(types.into_iter().collect());
        self
    }

    /// Partial name -> type overrides fed into inference for the rest.
    #[must_use]
    pub fn column_type_overrides(mut self, overrides: HashMap<String, DataType>) -> Self {
        self.type_overrides.extend(overrides);
        self
    }

    /// Cap how many rows type inference samples per column.
    #[must_use]
    pub fn sample_limit(mut self, limit: usize) -> Self {
        self.sample_limit = Some(limit);
        self
    }

    /// Row names: a column name, a row function or an explicit sequence.
    #[must_use]
    pub fn row_names(mut self, names: impl Into<RowNames>) -> Self {
        self.row_names = Some(names.into());
        self
    }

    /// Run the validated construction pipeline.
    ///
    /// Name resolution (placeholders, duplicate suffixing) and type
    /// resolution happen first; then each raw row is padded with nulls up
    /// to the column count (rows longer than the column count are a shape
    /// error) and every cell is cast by its column's type.
    pub fn build(self) -> Result<Table> {
        let mut warnings = Vec::new();

        // Name resolution.
        let names = match self.column_names {
            Some(supplied) => resolve_column_names(supplied, &mut warnings),
            None if !self.raw_rows.is_empty() => {
                let assigned: Vec<String> =
                    (0..self.raw_rows[0].len()).map(letter_name).collect();
                warnings.push(Warning::AllColumnsUnnamed {
                    assigned: assigned.clone(),
                });
                assigned
            }
            None => Vec::new(),
        };

        // Type resolution.
        let types = match self.column_types {
            Some(explicit) => {
                if explicit.len() != names.len() {
                    return Err(TableError::TypeCountMismatch {
                        names: names.len(),
                        types: explicit.len(),
                    });
                }
                explicit
            }
            None => {
                let mut inferrer = TypeInferrer::new().with_forced(self.type_overrides);
                if let Some(limit) = self.sample_limit {
                    inferrer = inferrer.with_limit(limit);
                }
                inferrer.run(&self.raw_rows, &names)
            }
        };

        // Casting. Short rows pad with nulls, long rows are rejected.
        let header = Arc::new(Header::new(names));
        let mut rows = Vec::with_capacity(self.raw_rows.len());

        for (i, raw_row) in self.raw_rows.into_iter().enumerate() {
            if raw_row.len() > header.len() {
                return Err(TableError::RowTooLong {
                    row: i,
                    len: raw_row.len(),
                    columns: header.len(),
                });
            }

            let mut cells = Vec::with_capacity(header.len());
            for (j, data_type) in types.iter().enumerate() {
                let raw_cell = raw_row.get(j).unwrap_or(&Value::Null);
                cells.push(data_type.cast(raw_cell)?);
            }
            rows.push(Row::new(cells, Arc::clone(&header)));
        }

        // Row-name computation.
        let row_names = match self.row_names {
            None => None,
            Some(RowNames::Column(name)) => {
                let position =
                    header
                        .position(&name)
                        .ok_or_else(|| TableError::ColumnNotFound {
                            name: name.clone(),
                        })?;
                Some(rows.iter().map(|row| row[position].clone()).collect())
            }
            Some(RowNames::Function(f)) => Some(rows.iter().map(|row| f(row)).collect()),
            Some(RowNames::Sequence(names)) => {
                if names.len() != rows.len() {
                    return Err(TableError::RowNameCountMismatch {
                        names: names.len(),
                        rows: rows.len(),
                    });
                }
                Some(names)
            }
        };

        if let Some(names) = &row_names {
            validate_row_names(names)?;
        }

        emit(&warnings);

        Ok(Table::assemble(
            header,
            Arc::new(types),
            rows,
            row_names.map(Arc::new),
            warnings,
        ))
    }
}

impl Table {
    /// Start building a table from raw rows.
    #[must_use]
    pub fn builder(raw_rows: Vec<Vec<Value>>) -> TableBuilder {
        TableBuilder {
            raw_rows,
            ..TableBuilder::default()
        }
    }

    /// Wire up the sequences from validated parts. Single entry point for
    /// both the builder and the fork path.
    fn assemble(
        header: Arc<Header>,
        column_types: Arc<Vec<DataType>>,
        rows: Vec<Row>,
        row_names: Option<Arc<Vec<Value>>>,
        warnings: Vec<Warning>,
    ) -> Table {
        let rows = MappedSequence::new(rows, row_names.clone());

        let columns: Vec<Column> = header
            .names()
            .iter()
            .enumerate()
            .map(|(i, name)| Column::new(i, name.clone(), column_types[i], rows.clone()))
            .collect();
        let column_keys: Vec<Value> = header
            .names()
            .iter()
            .map(|name| Value::from(name.as_str()))
            .collect();
        let columns = MappedSequence::new(columns, Some(Arc::new(column_keys)));

        Table {
            header,
            column_types,
            rows,
            columns,
            row_names,
            warnings,
        }
    }

    /// Build a new table from already-cast rows, reusing this table's
    /// column names and types.
    ///
    /// This skips validation and casting entirely; the caller must
    /// guarantee that every `Row` matches this table's shape and types.
    /// All transformation operators go through here, which is what makes
    /// derived tables O(rows) instead of O(rows x casting).
    ///
    /// `row_names` is the complete name sequence for the new table
    /// (`None` for an unnamed table); operators that drop or reorder rows
    /// permute the names themselves.
    #[must_use]
    pub fn fork(&self, rows: Vec<Row>, row_names: Option<Vec<Value>>) -> Table {
        Table::assemble(
            Arc::clone(&self.header),
            Arc::clone(&self.column_types),
            rows,
            row_names.map(Arc::new),
            Vec::new(),
        )
    }

    // ===== Read access =====

    #[must_use]
    pub fn column_names(&self) -> &[String] {
        self.header.names()
    }

    #[must_use]
    pub fn column_types(&self) -> &[DataType] {
        &self.column_types
    }

    /// The row sequence, keyed by row names when present.
    #[must_use]
    pub fn rows(&self) -> &MappedSequence<Row> {
        &self.rows
    }

    /// The column views, keyed by column names.
    #[must_use]
    pub fn columns(&self) -> &MappedSequence<Column> {
        &self.columns
    }

    #[must_use]
    pub fn row_names(&self) -> Option<&[Value]> {
        self.row_names.as_deref().map(Vec::as_slice)
    }

    /// Advisories recorded while this table was constructed. Forked tables
    /// start with none.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Column view by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(self.header.position(name)?)
    }

    // ===== Transformation operators =====

    /// New table with only the given columns, in the given order.
    pub fn select(&self, keys: impl Into<Keys>) -> Result<Table> {
        let names = keys.into().into_names();
        let positions = self.positions_of(&names)?;

        let types: Vec<DataType> = positions.iter().map(|&p| self.column_types[p]).collect();
        let header = Arc::new(Header::new(names));

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|row| {
                let cells: Vec<Value> = positions.iter().map(|&p| row[p].clone()).collect();
                Row::new(cells, Arc::clone(&header))
            })
            .collect();

        Ok(Table::assemble(
            header,
            Arc::new(types),
            rows,
            self.row_names.clone(),
            Vec::new(),
        ))
    }

    /// New table without the given columns, original order preserved.
    pub fn exclude(&self, keys: impl Into<Keys>) -> Result<Table> {
        let excluded = keys.into().into_names();
        let kept: Vec<String> = self
            .header
            .names()
            .iter()
            .filter(|name| !excluded.contains(name))
            .cloned()
            .collect();

        self.select(kept)
    }

    /// New table with only the rows that pass the predicate, in original
    /// order. Row names, when present, follow their rows.
    #[must_use]
    pub fn filter(&self, predicate: impl Fn(&Row) -> bool) -> Table {
        let all_names = self.row_names.as_deref();
        let mut rows = Vec::new();
        let mut names = all_names.map(|_| Vec::new());

        for (i, row) in self.rows.iter().enumerate() {
            if predicate(row) {
                rows.push(row.clone());
                if let (Some(names), Some(all)) = (&mut names, all_names) {
                    names.push(all[i].clone());
                }
            }
        }

        self.fork(rows, names)
    }

    /// First row that passes the predicate, if any. Short-circuits; does
    /// not build a new table.
    #[must_use]
    pub fn find(&self, predicate: impl Fn(&Row) -> bool) -> Option<&Row> {
        self.rows.iter().find(|row| predicate(row))
    }

    /// New table sorted by the key.
    ///
    /// The sort is stable: rows with equal keys keep their original
    /// relative order, with `reverse` flipping the overall direction only.
    /// Null key values sort below every non-null value at any position in
    /// a composite key, so nulls come first ascending and last descending.
    pub fn order_by(&self, key: impl Into<RowKey>, reverse: bool) -> Result<Table> {
        let resolved = self.resolve_key(key.into())?;

        let mut keyed: Vec<(usize, Vec<Value>)> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| (i, key_values(row, &resolved)))
            .collect();

        keyed.sort_by(|a, b| {
            let ordering = compare_keys(&a.1, &b.1);
            if reverse {
                ordering.reverse()
            } else {
                ordering
            }
        });

        let all_names = self.row_names.as_deref();
        let rows: Vec<Row> = keyed.iter().map(|&(i, _)| self.rows[i].clone()).collect();
        let names = all_names.map(|all| keyed.iter().map(|&(i, _)| all[i].clone()).collect());

        Ok(self.fork(rows, names))
    }

    /// New table with a slice of the rows, mirroring sequence slicing.
    ///
    /// With only `start_or_stop` given it is the *stop* bound ("first N
    /// rows"); as soon as `stop` or `step` is given it becomes the start.
    /// The slice applies identically to rows and row names. A zero step is
    /// a usage error.
    pub fn limit(
        &self,
        start_or_stop: usize,
        stop: Option<usize>,
        step: Option<usize>,
    ) -> Result<Table> {
        if step == Some(0) {
            return Err(TableError::ZeroStep);
        }

        let (start, stop, step) = if stop.is_none() && step.is_none() {
            (0, start_or_stop, 1)
        } else {
            (
                start_or_stop,
                stop.unwrap_or_else(|| self.rows.len()),
                step.unwrap_or(1),
            )
        };

        let sliced = self.rows.slice(start, stop, step);
        let names = sliced.names().map(<[Value]>::to_vec);

        Ok(self.fork(sliced.values().to_vec(), names))
    }

    /// New table keeping the first row seen for each distinct full-row
    /// value.
    #[must_use]
    pub fn distinct(&self) -> Table {
        self.distinct_resolved(&ResolvedKey::WholeRow)
    }

    /// New table keeping the first row seen for each distinct key value.
    /// Keys compare by value, not identity.
    pub fn distinct_by(&self, key: impl Into<RowKey>) -> Result<Table> {
        let resolved = self.resolve_key(key.into())?;
        Ok(self.distinct_resolved(&resolved))
    }

    fn distinct_resolved(&self, key: &ResolvedKey) -> Table {
        let all_names = self.row_names.as_deref();
        let mut seen: HashSet<Vec<String>> = HashSet::new();
        let mut rows = Vec::new();
        let mut names = all_names.map(|_| Vec::new());

        for (i, row) in self.rows.iter().enumerate() {
            // One key string per component; joining them into a single
            // string would collide when a text cell contains the joiner.
            let key_strings = match key {
                ResolvedKey::WholeRow => key_strings(row.iter()),
                ResolvedKey::Positions(positions) => {
                    key_strings(positions.iter().map(|&p| &row[p]))
                }
                ResolvedKey::Function(f) => vec![f(row).key()],
            };

            if seen.insert(key_strings) {
                rows.push(row.clone());
                if let (Some(names), Some(all)) = (&mut names, all_names) {
                    names.push(all[i].clone());
                }
            }
        }

        self.fork(rows, names)
    }

    /// New table with renamed columns.
    ///
    /// Accepts a full replacement list (same length as the current
    /// columns) or a partial old -> new mapping. When names actually
    /// change, uniqueness is re-resolved exactly as at construction
    /// (duplicates get `_2` suffixes and a warning), but rows are not
    /// re-cast; cell storage is shared with the receiver.
    pub fn rename_columns(&self, mapping: impl Into<NameMapping>) -> Result<Table> {
        let requested: Vec<String> = match mapping.into() {
            NameMapping::Full(names) => {
                if names.len() != self.header.len() {
                    return Err(TableError::RenameLengthMismatch {
                        expected: self.header.len(),
                        actual: names.len(),
                    });
                }
                names
            }
            NameMapping::Partial(map) => self
                .header
                .names()
                .iter()
                .map(|name| map.get(name).cloned().unwrap_or_else(|| name.clone()))
                .collect(),
        };

        if requested == self.header.names() {
            let names = self.row_names.as_deref().cloned();
            return Ok(self.fork(self.rows.values().to_vec(), names));
        }

        let mut warnings = Vec::new();
        let resolved =
            resolve_column_names(requested.into_iter().map(Some).collect(), &mut warnings);
        emit(&warnings);

        let header = Arc::new(Header::new(resolved));
        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|row| row.with_header(Arc::clone(&header)))
            .collect();

        Ok(Table::assemble(
            header,
            Arc::clone(&self.column_types),
            rows,
            self.row_names.clone(),
            warnings,
        ))
    }

    /// New table with renamed rows.
    ///
    /// A full sequence may name rows of a previously unnamed table; a
    /// partial mapping requires existing row names. Integer names are
    /// rejected, as at construction. Rows themselves are untouched.
    pub fn rename_row_names(&self, mapping: impl Into<RowNameMapping>) -> Result<Table> {
        let new_names: Vec<Value> = match mapping.into() {
            RowNameMapping::Full(names) => {
                if names.len() != self.rows.len() {
                    return Err(TableError::RowNameCountMismatch {
                        names: names.len(),
                        rows: self.rows.len(),
                    });
                }
                names
            }
            RowNameMapping::Partial(pairs) => {
                let current = self.row_names.as_deref().ok_or(TableError::RowsNotNamed)?;
                let map: HashMap<String, Value> = pairs
                    .into_iter()
                    .map(|(old, new)| (old.key(), new))
                    .collect();
                current
                    .iter()
                    .map(|name| map.get(&name.key()).cloned().unwrap_or_else(|| name.clone()))
                    .collect()
            }
        };

        validate_row_names(&new_names)?;

        Ok(self.fork(self.rows.values().to_vec(), Some(new_names)))
    }

    // ===== Conversion =====

    /// One ordered map per row, keyed by column names in column order.
    #[must_use]
    pub fn to_records(&self) -> Vec<IndexMap<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.header
                    .names()
                    .iter()
                    .enumerate()
                    .map(|(i, name)| {
                        (name.clone(), row.get(i).cloned().unwrap_or(Value::Null))
                    })
                    .collect()
            })
            .collect()
    }

    // ===== Helpers =====

    fn positions_of(&self, names: &[String]) -> Result<Vec<usize>> {
        names
            .iter()
            .map(|name| {
                self.header
                    .position(name)
                    .ok_or_else(|| TableError::ColumnNotFound { name: name.clone() })
            })
            .collect()
    }

    fn resolve_key(&self, key: RowKey) -> Result<ResolvedKey> {
        Ok(match key {
            RowKey::Column(name) => {
                ResolvedKey::Positions(self.positions_of(std::slice::from_ref(&name))?)
            }
            RowKey::Columns(names) => ResolvedKey::Positions(self.positions_of(&names)?),
            RowKey::Function(f) => ResolvedKey::Function(f),
        })
    }
}

/// A duck-typed key argument resolved to something directly evaluable.
enum ResolvedKey {
    Positions(Vec<usize>),
    Function(Arc<dyn Fn(&Row) -> Value>),
    WholeRow,
}

fn key_values(row: &Row, key: &ResolvedKey) -> Vec<Value> {
    match key {
        ResolvedKey::Positions(positions) => {
            positions.iter().map(|&p| row[p].clone()).collect()
        }
        ResolvedKey::Function(f) => vec![f(row)],
        ResolvedKey::WholeRow => row.values().to_vec(),
    }
}

fn compare_keys(a: &[Value], b: &[Value]) -> Ordering {
    for (left, right) in a.iter().zip(b) {
        match left.compare(right) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

fn key_strings<'a>(values: impl Iterator<Item = &'a Value>) -> Vec<String> {
    values.map(Value::key).collect()
}

/// Resolve supplied column names: `None` entries get letter placeholders,
/// duplicates get `_2`, `_3`, ... suffixes. Both record warnings.
fn resolve_column_names(
    supplied: Vec<Option<String>>,
    warnings: &mut Vec<Warning>,
) -> Vec<String> {
    let mut finals: Vec<String> = Vec::with_capacity(supplied.len());

    for (i, name) in supplied.into_iter().enumerate() {
        let base = match name {
            Some(name) => name,
            None => {
                let assigned = letter_name(i);
                warnings.push(Warning::UnnamedColumn {
                    index: i,
                    assigned: assigned.clone(),
                });
                assigned
            }
        };

        let mut candidate = base.clone();
        let mut suffix = 2;
        while finals.contains(&candidate) {
            candidate = format!("{base}_{suffix}");
            suffix += 1;
        }

        if candidate != base {
            warnings.push(Warning::DuplicateColumn {
                name: base,
                renamed: candidate.clone(),
            });
        }

        finals.push(candidate);
    }

    finals
}

/// Integer row names are rejected; positions are already integers and a
/// numeric name would be ambiguous with positional lookup.
fn validate_row_names(names: &[Value]) -> Result<()> {
    for (i, name) in names.iter().enumerate() {
        if matches!(name, Value::Int(_)) {
            return Err(TableError::IntegerRowName { row: i });
        }
    }
    Ok(())
}

fn emit(warnings: &[Warning]) {
    for warning in warnings {
        tracing::warn!("{warning}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(rows: &[&[&str]]) -> Vec<Vec<Value>> {
        rows.iter()
            .map(|row| row.iter().map(|s| Value::from(*s)).collect())
            .collect()
    }

    fn sample() -> Table {
        Table::builder(raw(&[&["1", "a"], &["2", "b"], &["3", "a"]]))
            .column_names(["id", "name"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_inferred_types_and_access() {
        let table = sample();
        assert_eq!(table.column_types(), &[DataType::Number, DataType::Text]);
        assert_eq!(table.rows()[2]["name"], Value::from("a"));
        assert_eq!(table.column("id").unwrap().get(1), Some(&Value::Int(2)));
    }

    #[test]
    fn test_placeholder_names_warn() {
        let table = Table::builder(raw(&[&["1", "2"]])).build().unwrap();
        assert_eq!(table.column_names(), ["A", "B"]);
        assert_eq!(table.warnings().len(), 1);
    }

    #[test]
    fn test_duplicate_names_suffixed() {
        let table = Table::builder(raw(&[&["1", "2", "3"]]))
            .column_names(["x", "x", "x"])
            .build()
            .unwrap();
        assert_eq!(table.column_names(), ["x", "x_2", "x_3"]);
        assert_eq!(table.warnings().len(), 2);
    }

    #[test]
    fn test_none_name_gets_letter() {
        let table = Table::builder(raw(&[&["1", "2"]]))
            .column_names_opt(vec![Some("id".to_string()), None])
            .build()
            .unwrap();
        assert_eq!(table.column_names(), ["id", "B"]);
        assert_eq!(
            table.warnings(),
            &[Warning::UnnamedColumn {
                index: 1,
                assigned: "B".to_string()
            }]
        );
    }

    #[test]
    fn test_short_rows_pad_long_rows_reject() {
        let table = Table::builder(raw(&[&["1"], &["2", "b"]]))
            .column_names(["id", "name"])
            .build()
            .unwrap();
        assert_eq!(table.rows()[0][1], Value::Null);

        let err = Table::builder(raw(&[&["1", "b", "extra"]]))
            .column_names(["id", "name"])
            .build()
            .unwrap_err();
        assert!(matches!(err, TableError::RowTooLong { row: 0, len: 3, columns: 2 }));
    }

    #[test]
    fn test_type_count_mismatch() {
        let err = Table::builder(raw(&[&["1", "a"]]))
            .column_names(["id", "name"])
            .column_types([DataType::Number])
            .build()
            .unwrap_err();
        assert!(matches!(err, TableError::TypeCountMismatch { names: 2, types: 1 }));
    }

    #[test]
    fn test_empty_table_is_valid() {
        let table = Table::builder(Vec::new()).build().unwrap();
        assert!(table.rows().is_empty());
        assert!(table.column_names().is_empty());
        assert!(table.columns().is_empty());
        assert!(table.warnings().is_empty());
    }

    #[test]
    fn test_row_names_from_column() {
        let table = Table::builder(raw(&[&["1", "a"], &["2", "b"]]))
            .column_names(["id", "name"])
            .row_names("name")
            .build()
            .unwrap();
        assert_eq!(
            table.row_names(),
            Some(&[Value::from("a"), Value::from("b")][..])
        );
        assert_eq!(
            table.rows().get_by_str("b").unwrap()["id"],
            Value::Int(2)
        );
    }

    #[test]
    fn test_integer_row_names_rejected() {
        let err = Table::builder(raw(&[&["1", "a"]]))
            .column_names(["id", "name"])
            .row_names("id")
            .build()
            .unwrap_err();
        assert!(matches!(err, TableError::IntegerRowName { row: 0 }));
    }

    #[test]
    fn test_row_name_function() {
        let table = Table::builder(raw(&[&["1", "a"], &["2", "b"]]))
            .column_names(["id", "name"])
            .row_names(RowNames::function(|row| {
                Value::Text(format!("r{}", row["name"]))
            }))
            .build()
            .unwrap();
        assert!(table.rows().get_by_str("ra").is_some());
        assert!(table.rows().get_by_str("rb").is_some());
        assert!(table.rows().get_by_str("a").is_none());
    }

    #[test]
    fn test_fork_shares_rows() {
        let table = sample();
        let forked = table.fork(table.rows().values().to_vec(), None);
        assert_eq!(forked.rows(), table.rows());
        assert!(forked.warnings().is_empty());
    }

    #[test]
    fn test_to_records() {
        let records = sample().to_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1]["id"], Value::Int(2));
        let keys: Vec<&String> = records[0].keys().collect();
        assert_eq!(keys, ["id", "name"]);
    }
}
