//! Frontend services for shared state and data management.

pub mod context;
pub mod status;
pub mod user;
