use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Identity, Role, Student};

#[derive(Debug, Clone, Serialize)]
pub struct IdentityDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<Identity> for IdentityDto {
    fn from(identity: Identity) -> Self {
        IdentityDto {
            id: identity.id,
            name: identity.name,
            email: identity.email,
            role: identity.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: IdentityDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentDto {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Student> for StudentDto {
    fn from(student: Student) -> Self {
        StudentDto {
            id: student
                .id
                .as_ref()
                .map(|oid| oid.to_hex())
                .unwrap_or_default(),
            name: student.name,
            age: student.age,
            city: student.city,
            user_id: student.user_id.as_ref().map(|oid| oid.to_hex()),
            created_at: student.created_at,
            updated_at: student.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        MessageResponse {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BulkInsertResponse {
    pub message: String,
    pub count: usize,
    pub data: Vec<StudentDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_student_dto_renders_hex_ids() {
        let id = ObjectId::new();
        let owner = ObjectId::new();
        let mut student = Student::new("Ada", Some(21), Some("Lagos".into()), Some(owner));
        student.id = Some(id);

        let dto = StudentDto::from(student);
        assert_eq!(dto.id, id.to_hex());
        assert_eq!(dto.user_id, Some(owner.to_hex()));
        assert_eq!(dto.age, Some(21));
    }

    #[test]
    fn test_identity_dto_excludes_secrets() {
        let identity = Identity {
            id: "abc".to_string(),
            role: Role::Student,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };

        let json = serde_json::to_value(IdentityDto::from(identity)).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role"], "student");
    }
}
