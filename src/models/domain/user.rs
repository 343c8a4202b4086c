use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Closed set of roles. Unknown role strings fail at deserialization instead
/// of silently matching nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
        }
    }
}

/// Stored user record. The `password` field holds the bcrypt hash, never
/// plaintext, and is stripped before anything reaches a response.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(name: &str, email: &str, password_hash: &str, role: Role) -> Self {
        User {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            password: password_hash.to_string(),
            role,
            created_at: Some(Utc::now()),
        }
    }

    /// The caller-facing profile derived from this record. Excludes the
    /// password hash by construction.
    pub fn identity(&self) -> AppResult<Identity> {
        let id = self
            .id
            .as_ref()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| AppError::Internal("user record has no id".to_string()))?;

        Ok(Identity {
            id,
            role: self.role,
            name: self.name.clone(),
            email: self.email.clone(),
        })
    }
}

/// The authenticated caller, resolved from the credential store and attached
/// to a single request. Immutable for the lifetime of that request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub role: Role,
    pub name: String,
    pub email: String,
}
