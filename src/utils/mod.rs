//! Custom utilities.

pub mod paths;
