use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Operator,
}

impl Role {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Operator => "operator",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "operator" => Some(Role::Operator),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,       // ⇔ users.username (TEXT UNIQUE)
    pub role: Role,             // ⇔ users.role ('admin' | 'operator')
    pub company_id: Option<i64>, // ⇔ users.company_id (nullable FK)
    pub active: bool,           // ⇔ users.active (INT, default 1)

    /// Resolved via LEFT JOIN on companies; None when the user has no company.
    pub company_name: Option<String>,
}
