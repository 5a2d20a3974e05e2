//! Payment outcome relay
//!
//! The hosted payment widget confirms a top-up against the server-issued
//! client secret and reports an outcome. Every outcome is forwarded to the
//! backend so it can reconcile the intent; only success yields a balance.

use lunchbox_client::{Api, HttpClient};
use shared::models::{PaymentConfirmation, PaymentOutcome, WalletBalance};

use crate::core::{AppError, AppResult};
use crate::forms::SubmitGuard;

pub const PAYMENT_FAILED_MESSAGE: &str = "Your payment could not be completed. Please try again.";
pub const PAYMENT_ACTION_MESSAGE: &str = "Your bank needs you to confirm this payment before it can complete.";

/// Relay a widget outcome; `Succeeded` returns the updated balance
pub async fn relay_payment_outcome<C: HttpClient>(
    api: &Api<C>,
    guard: &SubmitGuard,
    payment_intent_id: &str,
    outcome: &PaymentOutcome,
) -> AppResult<WalletBalance> {
    let confirmation = PaymentConfirmation::new(payment_intent_id, outcome);
    let relayed = guard.run(async { Ok(api.confirm_top_up(&confirmation).await?) }).await;

    let message = match outcome {
        PaymentOutcome::Succeeded => {
            let balance = relayed?;
            tracing::info!(payment_intent_id, balance = %balance.balance, "top-up confirmed");
            return Ok(balance);
        }
        PaymentOutcome::RequiresAction => {
            tracing::info!(payment_intent_id, "top-up requires further action");
            PAYMENT_ACTION_MESSAGE.to_string()
        }
        PaymentOutcome::Failed { message } => {
            tracing::warn!(payment_intent_id, reason = ?message, "top-up failed");
            message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(PAYMENT_FAILED_MESSAGE)
                .to_string()
        }
    };

    // The provider's outcome is what the user sees, even if the relay failed
    match relayed {
        Err(AppError::AlreadySubmitting) => Err(AppError::AlreadySubmitting),
        Err(e) => {
            tracing::warn!(payment_intent_id, error = %e, "payment outcome relay failed");
            Err(AppError::Payment(message))
        }
        Ok(_) => Err(AppError::Payment(message)),
    }
}
