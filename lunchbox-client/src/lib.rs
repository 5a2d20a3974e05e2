//! Lunchbox Client - HTTP client for the ordering backend
//!
//! One wrapper per backend endpoint, layered over the [`HttpClient`] trait
//! so callers (and tests) can swap the transport.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;

pub use api::Api;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, FALLBACK_MESSAGE};
pub use http::{HttpClient, NetworkHttpClient};
pub use mock::{MockHttpClient, RecordedCall};
