//! Command modules for the converter front-end
//!
//! - `converter`: raw form input in, display-ready state out
//! - `units`: unit lists for the selectors
//! - `format`: input parsing and display rounding

pub mod converter;
pub mod format;
pub mod units;
