use std::sync::Arc;

use crate::{
    auth::{BcryptHasher, JwtCodec},
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoStudentRepository, MongoUserRepository, UserRepository},
    services::{AuthService, StudentService},
};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub student_service: Arc<StudentService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(db: &Database, config: Config) -> AppResult<Self> {
        let users = Arc::new(MongoUserRepository::new(db, &config));
        users.ensure_indexes().await?;
        let students = Arc::new(MongoStudentRepository::new(db, &config));

        let hasher = Arc::new(BcryptHasher::new(config.bcrypt_cost));
        let codec = Arc::new(JwtCodec::new(&config.jwt_secret, config.jwt_ttl_hours));

        let auth_service = Arc::new(AuthService::new(
            users,
            hasher,
            codec,
            config.admin_secret.clone(),
        ));
        let student_service = Arc::new(StudentService::new(students));

        Ok(Self {
            auth_service,
            student_service,
            config: Arc::new(config),
        })
    }

    /// Assembles state from already-built services; used by tests that swap
    /// in non-Mongo repositories.
    pub fn with_services(
        auth_service: Arc<AuthService>,
        student_service: Arc<StudentService>,
        config: Config,
    ) -> Self {
        Self {
            auth_service,
            student_service,
            config: Arc::new(config),
        }
    }
}
