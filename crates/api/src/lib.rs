//! Typed REST client for the EdVenture Park dashboard backend.
//!
//! The backend owns all data; this crate holds a bearer token, attaches it
//! to requests, and exposes one accessor group per resource. Callers decide
//! what to do with failures (the CLI swallows most of them and falls back
//! to local defaults).

pub mod client;
pub mod error;
pub mod models;
pub mod token;

mod resources;

pub use client::ApiClient;
pub use error::{Error, Result};
pub use token::TokenStore;
