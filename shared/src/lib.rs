//! Shared types for Lunchbox
//!
//! Domain models, money helpers and response structures used by both the
//! HTTP client crate and the application crate.

pub mod error;
pub mod models;
pub mod money;
pub mod response;

// Re-exports
pub use error::{ModelError, ModelResult};
pub use money::{format_gbp, round_money};
pub use response::{PageQuery, Paginated};
pub use serde::{Deserialize, Serialize};
