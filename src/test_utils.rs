use mongodb::bson::oid::ObjectId;

use crate::models::domain::{Identity, Role, Student, User};

pub mod fixtures {
    use super::*;

    /// A persisted-looking user with a fixed bcrypt hash placeholder.
    pub fn test_user(email: &str, role: Role) -> User {
        let mut user = User::new("Test User", email, "$2b$04$placeholder-hash", role);
        user.id = Some(ObjectId::new());
        user
    }

    pub fn test_identity(role: Role) -> Identity {
        Identity {
            id: ObjectId::new().to_hex(),
            role,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    pub fn test_student(name: &str, owner: Option<ObjectId>) -> Student {
        let mut student = Student::new(name, Some(20), Some("Springfield".to_string()), owner);
        student.id = Some(ObjectId::new());
        student
    }
}

pub mod test_helpers {
    use actix_web::http::StatusCode;

    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::Role;

    #[test]
    fn test_fixture_user_has_id() {
        let user = test_user("fixture@example.com", Role::Student);
        assert!(user.id.is_some());
        assert_eq!(user.email, "fixture@example.com");
    }

    #[test]
    fn test_fixture_student_carries_owner() {
        let owner = mongodb::bson::oid::ObjectId::new();
        let student = test_student("Ada", Some(owner));
        assert_eq!(student.user_id, Some(owner));
    }
}
