//! Networking modules for the two HTTP backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` holds the injected base URLs, `api` performs the requests,
//! `error` classifies failures and `types` defines the wire schema.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
