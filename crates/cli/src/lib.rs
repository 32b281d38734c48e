//! evpark: command-line dashboard client for the EdVenture Park
//! incubation program.
//!
//! Screens own their state exclusively, fetch each resource with an
//! independent loading flag, fall back to local defaults when the backend
//! is unreachable, and apply mutations optimistically.

pub mod auth;
pub mod config;
pub mod defaults;
pub mod render;
pub mod views;
