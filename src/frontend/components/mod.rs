//! UI components and layouts.

pub mod footer;
pub mod layout;
pub mod status_badge;
