//! Forecast vs. actual supply gap analysis.
//!
//! The pipeline is `parse -> validate -> compute_gap -> summarize`, all pure
//! functions over explicit inputs; [`gap::analyze`] runs it end to end.

pub mod config;
pub mod error;
pub mod gap;
pub mod logging;
pub mod output;

pub use error::{GapError, Result};
