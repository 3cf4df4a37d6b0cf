use thiserror::Error;

/// Error raised when a raw value can not be coerced to a column's type.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("can not convert {value:?} to {target}")]
pub struct CastError {
    pub value: String,
    pub target: &'static str,
}

impl CastError {
    #[must_use]
    pub fn new(value: impl Into<String>, target: &'static str) -> Self {
        CastError {
            value: value.into(),
            target,
        }
    }
}
