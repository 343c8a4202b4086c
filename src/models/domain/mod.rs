pub mod student;
pub mod user;

pub use student::{Student, StudentPatch};
pub use user::{Identity, Role, User};
