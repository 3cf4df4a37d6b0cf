//! Value model and column data types for slate tables.
//!
//! A [`Value`] is a single typed cell. A [`DataType`] is the casting
//! capability for one column: it turns raw input values into their canonical
//! typed form. [`TypeInferrer`] picks a `DataType` per column by sampling
//! rows when the caller does not supply types.

mod data_type;
mod error;
mod infer;
mod value;

pub use data_type::DataType;
pub use error::CastError;
pub use infer::TypeInferrer;
pub use value::Value;
