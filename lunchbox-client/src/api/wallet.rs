use rust_decimal::Decimal;
use shared::models::{
    AmountRequest, PaymentConfirmation, TopUpIntent, WalletBalance, WalletTransaction, Withdrawal,
    WithdrawalPreview, WithdrawalRequest,
};
use shared::{PageQuery, Paginated};

use super::Api;
use crate::{ClientResult, HttpClient};

impl<C: HttpClient> Api<C> {
    // ========== Wallet API ==========

    pub async fn wallet_balance(&self) -> ClientResult<WalletBalance> {
        self.http.get("wallet/balance").await
    }

    pub async fn wallet_transactions(
        &self,
        page: &PageQuery,
    ) -> ClientResult<Paginated<WalletTransaction>> {
        self.http.get_with_query("wallet/transactions", page).await
    }

    /// Ask the server for a payment intent; the returned client secret is
    /// handed to the hosted payment widget.
    pub async fn create_top_up(&self, amount: Decimal) -> ClientResult<TopUpIntent> {
        self.http
            .post("wallet/top-up/intent", &AmountRequest { amount })
            .await
    }

    /// Relay the widget's confirmation result
    pub async fn confirm_top_up(
        &self,
        confirmation: &PaymentConfirmation,
    ) -> ClientResult<WalletBalance> {
        self.http.post("wallet/top-up/confirm", confirmation).await
    }

    pub async fn withdrawal_preview(&self, amount: Decimal) -> ClientResult<WithdrawalPreview> {
        self.http
            .post("wallet/withdrawals/preview", &AmountRequest { amount })
            .await
    }

    pub async fn request_withdrawal(&self, request: &WithdrawalRequest) -> ClientResult<Withdrawal> {
        self.http.post("wallet/withdrawals", request).await
    }
}
