//! Typed client for the directory-service REST API

mod auth;
mod client;
mod groups;
mod health;
mod users;

pub use client::ApiClient;
