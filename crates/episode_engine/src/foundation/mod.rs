//! Foundation module - low-level utilities used throughout the crate

pub mod logging;
