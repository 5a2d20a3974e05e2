//! Employee Model

use serde::{Deserialize, Serialize};

/// Role within the corporate account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Employee,
    Manager,
    Admin,
}

impl Role {
    /// Managers and admins approve orders and edit job titles
    pub fn can_approve(&self) -> bool {
        matches!(self, Self::Manager | Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Employee => "Employee",
            Self::Manager => "Manager",
            Self::Admin => "Admin",
        };
        f.write_str(s)
    }
}

/// Minimal job title reference embedded in an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobTitleRef {
    pub id: String,
    pub name: String,
}

/// Employee entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub job_title: Option<JobTitleRef>,
}

/// Employee listing filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Role change payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleChangeRequest {
    pub role: Role,
}
