//! Frontend module for the Statusdeck application.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
