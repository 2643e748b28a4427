use std::fmt::{Display, Formatter};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GapError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GapError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    State(#[from] StateError),
}

/// Which quantity list a token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityField {
    Forecast,
    Actual,
}

impl Display for QuantityField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forecast => write!(f, "forecast"),
            Self::Actual => write!(f, "actual"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field} value {token:?} at position {position} in {raw:?}: all forecast and actual values must be valid numbers")]
pub struct ParseError {
    pub field: QuantityField,
    /// 1-based index of the offending token.
    pub position: usize,
    pub token: String,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the number of items ({labels}), forecast values ({forecasts}) and actual values ({actuals}) must match")]
    LengthMismatch {
        labels: usize,
        forecasts: usize,
        actuals: usize,
    },
    #[error("input fields cannot be empty")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no gap records computed; run compute_gap before requesting a summary")]
pub struct StateError;
