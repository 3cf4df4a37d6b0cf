use std::fmt;

/// Non-fatal advisories recorded during table construction.
///
/// Warnings never alter control flow: the table is still built. They are
/// kept on the constructed table ([`crate::Table::warnings`]) and mirrored
/// through `tracing::warn!` so there is no global mutable warning state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A supplied column name was `None`; a letter placeholder was assigned.
    UnnamedColumn { index: usize, assigned: String },
    /// No column names were supplied at all; every column got a placeholder.
    AllColumnsUnnamed { assigned: Vec<String> },
    /// A duplicate column name was suffixed to keep names unique.
    DuplicateColumn { name: String, renamed: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnnamedColumn { index, assigned } => {
                write!(
                    f,
                    "column {index} has no name, \"{assigned}\" will be used"
                )
            }
            Warning::AllColumnsUnnamed { assigned } => {
                write!(f, "column names not specified, {assigned:?} will be used")
            }
            Warning::DuplicateColumn { name, renamed } => {
                write!(
                    f,
                    "duplicate column name \"{name}\", \"{renamed}\" will be used"
                )
            }
        }
    }
}
