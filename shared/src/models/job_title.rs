//! Job Title Model
//!
//! A job title carries the approval threshold: the spend above which an
//! employee's order needs manager approval. Enforcement is server-side.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Job title entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTitle {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub approval_threshold: Decimal,
    #[serde(default)]
    pub employee_count: u32,
}

/// Create job title payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTitleCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub approval_threshold: Decimal,
}

/// Update job title payload.
///
/// `None` leaves a field unchanged. For `description`, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTitleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_threshold: Option<Decimal>,
}

impl JobTitleUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.approval_threshold.is_none()
    }
}

/// Assign job title payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignJobTitleRequest {
    pub employee_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_distinguishes_absent_from_cleared() {
        let keep = JobTitleUpdate {
            name: Some("Engineer".into()),
            ..JobTitleUpdate::default()
        };
        assert_eq!(serde_json::to_value(&keep).unwrap(), json!({"name": "Engineer"}));

        let clear = JobTitleUpdate {
            description: Some(None),
            ..JobTitleUpdate::default()
        };
        assert_eq!(serde_json::to_value(&clear).unwrap(), json!({"description": null}));
        assert!(JobTitleUpdate::default().is_empty());
    }
}
