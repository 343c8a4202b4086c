pub mod student_repository;
pub mod user_repository;

pub use student_repository::{MongoStudentRepository, StudentRepository};
pub use user_repository::{MongoUserRepository, UserRepository};

#[cfg(test)]
pub use student_repository::MockStudentRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
