//! diradm - administration client for an LDAP-backed directory service
//!
//! The library half of the CLI. The reconciliation engine, session
//! lifecycle, and API client live here so integration tests can exercise
//! them directly; the binary in main.rs is a thin clap dispatcher.

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod dn;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod reconcile;
pub mod search;
pub mod session;
