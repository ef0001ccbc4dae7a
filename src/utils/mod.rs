//! Utility modules for post processing.

pub mod date;
