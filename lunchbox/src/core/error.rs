//! Application error type
//!
//! Every workflow in this crate returns [`AppResult`]. Failures from the
//! model, client and cart layers are wrapped unchanged so callers can still
//! match on them; [`AppError::user_message`] gives the text to show.

use lunchbox_client::{ClientError, FALLBACK_MESSAGE};
use shared::ModelError;
use thiserror::Error;

use crate::cart::CartError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Input rejected before any network call
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// A submission on the same guard is still in flight
    #[error("A submission is already in progress")]
    AlreadySubmitting,

    /// Ordering for the next delivery day has closed
    #[error("Ordering for {delivery_date} closed at {cutoff}")]
    OrderingClosed {
        delivery_date: chrono::NaiveDate,
        cutoff: String,
    },

    #[error("Your cart is empty")]
    EmptyCart,

    /// Payment provider reported a failure or an unfinished payment
    #[error("Payment error: {0}")]
    Payment(String),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Field the error belongs to, for inline display
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Text suitable for a dismissible banner
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Payment(message) => message.clone(),
            Self::Client(err) => err.user_message(),
            Self::AlreadySubmitting | Self::OrderingClosed { .. } | Self::EmptyCart => self.to_string(),
            Self::Cart(_) | Self::Model(_) | Self::Io(_) | Self::Config(_) => FALLBACK_MESSAGE.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
