//! Core module - configuration and errors
//!
//! - [`Config`] - environment configuration
//! - [`AppError`] - application error

pub mod config;
pub mod error;

pub use config::{Config, LogSettings};
pub use error::{AppError, AppResult};
