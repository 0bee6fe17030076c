//! Display-formatting helpers.

pub mod format;

pub use format::{format_date, format_relative_time};
