//! Utility functions for logging and numeric presentation

mod logging;
mod rounding;

pub use logging::{setup_logging, LogConfig};
pub use rounding::{format_gb, round_to};
