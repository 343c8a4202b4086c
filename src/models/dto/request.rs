use serde::Deserialize;
use validator::Validate;

use crate::models::domain::Role;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,

    #[validate(email(message = "valid email is required"))]
    pub email: String,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,

    /// Requested role; defaults to `student`. Granting `admin` additionally
    /// requires `admin_secret` to match the server's provisioning secret.
    #[serde(default)]
    pub role: Option<Role>,

    #[serde(default)]
    pub admin_secret: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "valid email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub age: Option<u32>,

    #[serde(default)]
    pub city: Option<String>,

    /// Hex id of the owning user account, when the record is linked to one.
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, max = 200, message = "name must be a non-empty string"))]
    pub name: Option<String>,

    #[serde(default)]
    pub age: Option<u32>,

    #[serde(default)]
    pub city: Option<String>,
}

impl UpdateStudentRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.city.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_rejects_short_password() {
        let request = RegisterRequest {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "short".to_string(),
            role: None,
            admin_secret: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let request = RegisterRequest {
            name: "Jane".to_string(),
            email: "not-an-email".to_string(),
            password: "longenough".to_string(),
            role: None,
            admin_secret: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_unknown_role_fails_to_parse() {
        let result = serde_json::from_str::<RegisterRequest>(
            r#"{"name":"Jane","email":"jane@example.com","password":"longenough","role":"root"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_empty_detection() {
        assert!(UpdateStudentRequest::default().is_empty());

        let update = UpdateStudentRequest {
            city: Some("Lagos".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
        assert!(update.validate().is_ok());
    }
}
