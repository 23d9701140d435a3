//! HTTP tab source.
//!
//! Provides the reqwest-backed implementation of tab search and document
//! fetch, configured from [`crate::config::Config`].

/// HTTP client for the search endpoint and tab documents
pub mod api;

// Re-export key components
pub use api::TabClient;
