//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod crud;
pub mod health;
