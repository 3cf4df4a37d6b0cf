use crate::mapped_sequence::MappedSequence;
use crate::row::Row;
use slate_types::{DataType, Value};

/// A read-only view of the i-th value across all rows of a table.
///
/// A column owns no cell data: it holds its position, name, data type and a
/// shared handle on the owning table's row sequence, and reads
/// `rows[i][index]` on demand. Constructing one is O(1).
#[derive(Debug, Clone)]
pub struct Column {
    index: usize,
    name: String,
    data_type: DataType,
    rows: MappedSequence<Row>,
}

impl Column {
    #[must_use]
    pub(crate) fn new(
        index: usize,
        name: String,
        data_type: DataType,
        rows: MappedSequence<Row>,
    ) -> Self {
        Column {
            index,
            name,
            data_type,
            rows,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value at row position `row`.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(self.index))
    }

    /// Value for the named row, when the table has row names.
    #[must_use]
    pub fn get_named(&self, row_name: &Value) -> Option<&Value> {
        self.rows.get_named(row_name).and_then(|r| r.get(self.index))
    }

    /// Iterate the column's values in row order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        let index = self.index;
        self.rows.iter().filter_map(move |row| row.get(index))
    }
}
