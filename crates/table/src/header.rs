use std::collections::HashMap;

/// Column names plus the name -> position map shared by a table and all of
/// its rows. Built once per table; rows hold it behind an `Arc` so field
/// access by name costs a single map lookup.
#[derive(Debug, Clone, Default)]
pub struct Header {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Header {
    #[must_use]
    pub fn new(names: Vec<String>) -> Self {
        let mut positions = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            positions.entry(name.clone()).or_insert(i);
        }
        Header { names, positions }
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }
}

/// Deterministic placeholder name for an unnamed column: A..Z, AA, AB, ...
#[must_use]
pub fn letter_name(index: usize) -> String {
    let mut out = Vec::new();
    let mut i = index;
    loop {
        out.push(b'A' + (i % 26) as u8);
        if i < 26 {
            break;
        }
        i = i / 26 - 1;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
