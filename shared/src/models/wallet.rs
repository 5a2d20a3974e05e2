//! Wallet Model
//!
//! Top-ups go through the hosted payment provider: the server issues a
//! client secret, the widget confirms, and the outcome is relayed back.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    pub balance: Decimal,
    /// Funds reserved by orders awaiting approval
    #[serde(default)]
    pub pending: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "GBP".to_string()
}

impl WalletBalance {
    /// Balance minus pending reservations
    pub fn available(&self) -> Decimal {
        (self.balance - self.pending).max(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    TopUp,
    Withdrawal,
    OrderPayment,
    Refund,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Amount-only payload (top-up intent, withdrawal preview)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountRequest {
    pub amount: Decimal,
}

/// Server-issued payment intent for a top-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUpIntent {
    pub client_secret: String,
    pub payment_intent_id: String,
    pub amount: Decimal,
}

/// Result reported by the hosted payment widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Succeeded,
    RequiresAction,
    Failed { message: Option<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Succeeded,
    RequiresAction,
    Failed,
}

/// Relay of a payment outcome to the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    pub payment_intent_id: String,
    pub status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl PaymentConfirmation {
    pub fn new(payment_intent_id: impl Into<String>, outcome: &PaymentOutcome) -> Self {
        let (status, error_message) = match outcome {
            PaymentOutcome::Succeeded => (PaymentStatus::Succeeded, None),
            PaymentOutcome::RequiresAction => (PaymentStatus::RequiresAction, None),
            PaymentOutcome::Failed { message } => (PaymentStatus::Failed, message.clone()),
        };
        Self {
            payment_intent_id: payment_intent_id.into(),
            status,
            error_message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalPreview {
    pub amount: Decimal,
    #[serde(default)]
    pub fee: Decimal,
    pub net_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    pub amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WithdrawalStatus {
    Pending,
    Processing,
    Paid,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    pub id: String,
    pub amount: Decimal,
    #[serde(default)]
    pub fee: Decimal,
    pub net_amount: Decimal,
    pub status: WithdrawalStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_confirmation_carries_failure_message() {
        let outcome = PaymentOutcome::Failed {
            message: Some("Your card was declined.".into()),
        };
        let confirmation = PaymentConfirmation::new("pi_123", &outcome);
        assert_eq!(
            serde_json::to_value(&confirmation).unwrap(),
            json!({
                "paymentIntentId": "pi_123",
                "status": "failed",
                "errorMessage": "Your card was declined."
            })
        );
    }

    #[test]
    fn test_available_never_negative() {
        let balance: WalletBalance =
            serde_json::from_value(json!({"balance": "10.00", "pending": "12.00"})).unwrap();
        assert_eq!(balance.currency, "GBP");
        assert_eq!(balance.available(), Decimal::ZERO);
    }
}
