use crate::header::Header;
use slate_types::Value;
use std::ops::Index;
use std::sync::Arc;

/// An immutable, fixed-length tuple of already-cast values.
///
/// Cells live behind an `Arc`, and the column name -> position map is the
/// table-wide [`Header`], also `Arc`-shared. Cloning a row is two pointer
/// bumps, which is what lets forked tables share rows with their parent.
#[derive(Debug, Clone)]
pub struct Row {
    cells: Arc<Vec<Value>>,
    header: Arc<Header>,
}

impl Row {
    #[must_use]
    pub fn new(cells: Vec<Value>, header: Arc<Header>) -> Self {
        Row {
            cells: Arc::new(cells),
            header,
        }
    }

    /// Same cells, different header. Used when columns are renamed: cell
    /// storage is shared, only the name map changes.
    #[must_use]
    pub(crate) fn with_header(&self, header: Arc<Header>) -> Self {
        Row {
            cells: Arc::clone(&self.cells),
            header,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.cells.get(index)
    }

    /// Cell by column name.
    #[must_use]
    pub fn get_named(&self, name: &str) -> Option<&Value> {
        self.cells.get(self.header.position(name)?)
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.cells.iter()
    }
}

impl Index<usize> for Row {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.cells[index]
    }
}

impl Index<&str> for Row {
    type Output = Value;

    /// Panics if the column does not exist; use [`Row::get_named`] for a
    /// fallible lookup.
    fn index(&self, name: &str) -> &Value {
        self.get_named(name)
            .unwrap_or_else(|| panic!("column not found: {name}"))
    }
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
