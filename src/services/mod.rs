pub mod auth_service;
pub mod student_service;

pub use auth_service::AuthService;
pub use student_service::StudentService;
