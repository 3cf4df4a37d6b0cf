use slate_types::Value;
use std::collections::HashMap;
use std::ops::Index;
use std::sync::Arc;

/// An ordered sequence with optional unique names.
///
/// Values keep insertion order and are reachable in O(1) by position or,
/// when names are present, by name. Values and names live behind `Arc`s, so
/// cloning a sequence (as every table fork does) never copies row data.
///
/// Names may be any non-integer [`Value`]; the internal map is keyed by
/// [`Value::key`] so floats and dates work as names without a `Hash` impl on
/// the value enum. On duplicate names the first occurrence wins; full
/// uniqueness is the caller's obligation.
#[derive(Debug, Clone)]
pub struct MappedSequence<T> {
    values: Arc<Vec<T>>,
    names: Option<Arc<Vec<Value>>>,
    index: Arc<HashMap<String, usize>>,
}

impl<T> MappedSequence<T> {
    #[must_use]
    pub fn new(values: Vec<T>, names: Option<Arc<Vec<Value>>>) -> Self {
        Self::from_shared(Arc::new(values), names)
    }

    #[must_use]
    pub fn from_shared(values: Arc<Vec<T>>, names: Option<Arc<Vec<Value>>>) -> Self {
        let mut index = HashMap::new();
        if let Some(names) = &names {
            index.reserve(names.len());
            for (i, name) in names.iter().enumerate() {
                index.entry(name.key()).or_insert(i);
            }
        }
        MappedSequence {
            values,
            names,
            index: Arc::new(index),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Lookup by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Lookup by name.
    #[must_use]
    pub fn get_named(&self, name: &Value) -> Option<&T> {
        let i = *self.index.get(&name.key())?;
        self.values.get(i)
    }

    /// Lookup by text name; shorthand for `get_named(&Value::from(name))`.
    #[must_use]
    pub fn get_by_str(&self, name: &str) -> Option<&T> {
        self.get_named(&Value::from(name))
    }

    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[must_use]
    pub fn names(&self) -> Option<&[Value]> {
        self.names.as_deref().map(Vec::as_slice)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T: Clone> MappedSequence<T> {
    /// Sub-sequence for `start..stop` with the given step, names sliced
    /// identically. Bounds are clamped; `step` must be non-zero (validated
    /// by callers before reaching here).
    #[must_use]
    pub fn slice(&self, start: usize, stop: usize, step: usize) -> Self {
        let stop = stop.min(self.values.len());
        let picked: Vec<usize> = if start >= stop {
            Vec::new()
        } else {
            (start..stop).step_by(step.max(1)).collect()
        };

        let values: Vec<T> = picked.iter().map(|&i| self.values[i].clone()).collect();
        let names = self
            .names
            .as_ref()
            .map(|names| Arc::new(picked.iter().map(|&i| names[i].clone()).collect()));

        MappedSequence::new(values, names)
    }
}

impl<T> Index<usize> for MappedSequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<'a, T> IntoIterator for &'a MappedSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T: PartialEq> PartialEq for MappedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.values == *other.values
    }
}

impl<T> Default for MappedSequence<T> {
    fn default() -> Self {
        MappedSequence::new(Vec::new(), None)
    }
}
