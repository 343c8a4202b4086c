pub mod auth_handler;
pub mod health_handler;
pub mod student_handler;
