//! calcli: terminal calculator client (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod app;
pub mod client;
pub mod config;
pub mod constants;
pub mod env;
pub mod error;
pub mod logging;
pub mod messages;
pub mod models;
pub mod output;
pub mod ui;
pub mod validate;
