//! Immutable typed table with spreadsheet/SQL-like transformations.
//!
//! A [`Table`] is built once from raw rows (names resolved, types inferred
//! or supplied, every cell cast to its column's canonical form) and never
//! mutated afterwards. Transformation operators (`select`, `filter`,
//! `order_by`, `distinct`, ...) return new tables that share row storage
//! with their parent instead of copying it.
//!
//! # Examples
//!
//! ```
//! use slate_table::Table;
//! use slate_types::Value;
//!
//! let table = Table::builder(vec![
//!     vec![Value::from(1), Value::from("a")],
//!     vec![Value::from(2), Value::from("b")],
//!     vec![Value::from(3), Value::from("a")],
//! ])
//! .column_names(["id", "name"])
//! .build()
//! .unwrap();
//!
//! let big = table.filter(|row| row["id"].as_int() > Some(1));
//! assert_eq!(big.rows().len(), 2);
//! // The original is untouched.
//! assert_eq!(table.rows().len(), 3);
//!
//! let names = table.select("name").unwrap();
//! assert_eq!(names.column_names(), ["name"]);
//! ```

mod column;
mod csv;
mod error;
mod header;
mod json;
mod keys;
mod mapped_sequence;
mod row;
mod table;
mod text;
mod warn;

pub use column::Column;
pub use csv::CsvOptions;
pub use error::{Result, TableError};
pub use keys::{Keys, NameMapping, RowKey, RowNameMapping, RowNames};
pub use mapped_sequence::MappedSequence;
pub use row::Row;
pub use table::{Table, TableBuilder};
pub use warn::Warning;

// Re-export the value model so most callers need a single import.
pub use slate_types::{CastError, DataType, TypeInferrer, Value};
