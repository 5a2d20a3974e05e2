//! Forms and mutating actions
//!
//! Each form validates locally, then submits through a [`SubmitGuard`] so a
//! second click while the first request is pending is rejected.

pub mod submit;
pub mod validation;

use lunchbox_client::{Api, HttpClient};
use rust_decimal::Decimal;
use shared::models::{
    ContactMessage, Employee, JobTitle, JobTitleCreate, JobTitleUpdate, Order, Role, TopUpIntent,
    WalletBalance, Withdrawal, WithdrawalPreview, WithdrawalRequest,
};

use crate::core::{AppError, AppResult};
pub use submit::{SubmitGuard, SubmitTicket};
use validation::*;

// ========== Contact ==========

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> AppResult<ContactMessage> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_email(&self.email, "email")?;
        validate_optional_text(Some(&self.company), "company", MAX_NAME_LEN)?;
        validate_text_range(&self.message, "message", MIN_MESSAGE_LEN, MAX_MESSAGE_LEN)?;
        let company = self.company.trim();
        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: (!company.is_empty()).then(|| company.to_string()),
            message: self.message.trim().to_string(),
        })
    }

    pub async fn submit<C: HttpClient>(&self, api: &Api<C>, guard: &SubmitGuard) -> AppResult<()> {
        let message = self.validate()?;
        guard
            .run(async {
                api.send_contact_message(&message).await?;
                tracing::info!("contact message sent");
                Ok(())
            })
            .await
    }
}

// ========== Wallet ==========

/// Wallet top-up amount as typed by the user
#[derive(Debug, Clone, Default)]
pub struct TopUpForm {
    pub amount: String,
}

impl TopUpForm {
    pub fn validate(&self) -> AppResult<Decimal> {
        let amount = parse_amount(&self.amount, "amount")?;
        validate_amount(amount, "amount", MIN_TOP_UP, MAX_TOP_UP)?;
        Ok(amount)
    }

    /// Ask the server for a payment intent. The client secret goes to the
    /// payment widget; its result comes back through
    /// [`crate::payments::relay_payment_outcome`].
    pub async fn submit<C: HttpClient>(&self, api: &Api<C>, guard: &SubmitGuard) -> AppResult<TopUpIntent> {
        let amount = self.validate()?;
        guard
            .run(async {
                let intent = api.create_top_up(amount).await?;
                tracing::info!(payment_intent_id = %intent.payment_intent_id, %amount, "top-up intent created");
                Ok(intent)
            })
            .await
    }
}

#[derive(Debug, Clone, Default)]
pub struct WithdrawalForm {
    pub amount: String,
}

impl WithdrawalForm {
    /// Amount between the minimum withdrawal and the available balance
    pub fn validate(&self, balance: &WalletBalance) -> AppResult<Decimal> {
        let amount = parse_amount(&self.amount, "amount")?;
        let available = balance.available();
        if available < MIN_WITHDRAWAL {
            return Err(AppError::validation(
                "amount",
                "Your available balance is below the minimum withdrawal",
            ));
        }
        validate_amount(amount, "amount", MIN_WITHDRAWAL, available)?;
        Ok(amount)
    }

    /// Fee and net amount for the entered value
    pub async fn preview<C: HttpClient>(
        &self,
        api: &Api<C>,
        balance: &WalletBalance,
    ) -> AppResult<WithdrawalPreview> {
        let amount = self.validate(balance)?;
        Ok(api.withdrawal_preview(amount).await?)
    }

    pub async fn submit<C: HttpClient>(
        &self,
        api: &Api<C>,
        guard: &SubmitGuard,
        balance: &WalletBalance,
    ) -> AppResult<Withdrawal> {
        let amount = self.validate(balance)?;
        guard
            .run(async {
                let withdrawal = api.request_withdrawal(&WithdrawalRequest { amount }).await?;
                tracing::info!(withdrawal_id = %withdrawal.id, %amount, "withdrawal requested");
                Ok(withdrawal)
            })
            .await
    }
}

// ========== Job titles ==========

#[derive(Debug, Clone, Default)]
pub struct JobTitleForm {
    pub name: String,
    pub description: String,
    pub approval_threshold: String,
}

impl JobTitleForm {
    /// Prefill from an existing job title
    pub fn from_existing(job: &JobTitle) -> Self {
        Self {
            name: job.name.clone(),
            description: job.description.clone().unwrap_or_default(),
            approval_threshold: job.approval_threshold.to_string(),
        }
    }

    pub fn validate(&self) -> AppResult<JobTitleCreate> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(Some(&self.description), "description", MAX_NOTE_LEN)?;
        let approval_threshold = parse_amount(&self.approval_threshold, "approval_threshold")?;
        validate_non_negative(approval_threshold, "approval_threshold")?;
        let description = self.description.trim();
        Ok(JobTitleCreate {
            name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            approval_threshold,
        })
    }

    /// Only the fields that differ from `existing`; a cleared description
    /// is sent as an explicit null.
    pub fn changes_from(&self, existing: &JobTitle) -> AppResult<JobTitleUpdate> {
        let new = self.validate()?;
        Ok(JobTitleUpdate {
            name: (new.name != existing.name).then_some(new.name),
            description: (new.description != existing.description).then_some(new.description),
            approval_threshold: (new.approval_threshold != existing.approval_threshold)
                .then_some(new.approval_threshold),
        })
    }

    pub async fn create<C: HttpClient>(&self, api: &Api<C>, guard: &SubmitGuard) -> AppResult<JobTitle> {
        let payload = self.validate()?;
        guard
            .run(async {
                let job = api.create_job_title(&payload).await?;
                tracing::info!(job_title_id = %job.id, name = %job.name, "job title created");
                Ok(job)
            })
            .await
    }

    /// Send the changed fields; with nothing changed the existing title is
    /// returned without a request.
    pub async fn update<C: HttpClient>(
        &self,
        api: &Api<C>,
        guard: &SubmitGuard,
        existing: &JobTitle,
    ) -> AppResult<JobTitle> {
        let changes = self.changes_from(existing)?;
        if changes.is_empty() {
            return Ok(existing.clone());
        }
        guard
            .run(async {
                let job = api.update_job_title(&existing.id, &changes).await?;
                tracing::info!(job_title_id = %job.id, "job title updated");
                Ok(job)
            })
            .await
    }
}

pub async fn delete_job_title<C: HttpClient>(api: &Api<C>, guard: &SubmitGuard, job_title_id: &str) -> AppResult<()> {
    validate_id(job_title_id, "job_title")?;
    guard
        .run(async {
            api.delete_job_title(job_title_id).await?;
            tracing::info!(job_title_id, "job title deleted");
            Ok(())
        })
        .await
}

pub async fn assign_job_title<C: HttpClient>(
    api: &Api<C>,
    guard: &SubmitGuard,
    job_title_id: &str,
    employee_id: &str,
) -> AppResult<Employee> {
    validate_id(job_title_id, "job_title")?;
    validate_id(employee_id, "employee")?;
    guard
        .run(async { Ok(api.assign_job_title(job_title_id, employee_id).await?) })
        .await
}

// ========== Employees ==========

pub async fn change_role<C: HttpClient>(
    api: &Api<C>,
    guard: &SubmitGuard,
    employee_id: &str,
    role: Role,
) -> AppResult<Employee> {
    validate_id(employee_id, "employee")?;
    guard
        .run(async {
            let employee = api.change_role(employee_id, role).await?;
            tracing::info!(employee_id, %role, "role changed");
            Ok(employee)
        })
        .await
}

// ========== Approvals ==========

pub async fn approve_order<C: HttpClient>(api: &Api<C>, guard: &SubmitGuard, order_id: &str) -> AppResult<Order> {
    validate_id(order_id, "order")?;
    guard.run(async { Ok(api.approve_order(order_id).await?) }).await
}

pub async fn reject_order<C: HttpClient>(
    api: &Api<C>,
    guard: &SubmitGuard,
    order_id: &str,
    reason: &str,
) -> AppResult<Order> {
    validate_id(order_id, "order")?;
    validate_required_text(reason, "reason", MAX_NOTE_LEN)?;
    guard
        .run(async { Ok(api.reject_order(order_id, reason.trim()).await?) })
        .await
}

/// Cancel one of the user's own orders while it is still cancellable
pub async fn cancel_order<C: HttpClient>(api: &Api<C>, guard: &SubmitGuard, order: &Order) -> AppResult<Order> {
    if !order.status.is_cancellable() {
        return Err(AppError::validation("status", "This order can no longer be cancelled"));
    }
    guard.run(async { Ok(api.cancel_order(&order.id).await?) }).await
}
