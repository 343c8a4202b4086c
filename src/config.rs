use std::env;

use secrecy::SecretString;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing {0} environment variable. Set it in .env or your environment and restart.")]
    MissingVar(&'static str),

    #[error("Invalid value for {0} environment variable")]
    InvalidVar(&'static str),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub users_collection: String,
    pub students_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub jwt_secret: SecretString,
    pub jwt_ttl_hours: i64,
    pub admin_secret: Option<SecretString>,
    pub bcrypt_cost: u32,
}

impl Config {
    /// Reads configuration from the environment. The signing secret has no
    /// default: a missing `JWT_SECRET` is a startup error, never a silent
    /// fallback to a well-known value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = env::var("JWT_SECRET")
            .map(SecretString::from)
            .map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

        let jwt_ttl_hours = match env::var("JWT_TTL_HOURS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidVar("JWT_TTL_HOURS"))?,
            Err(_) => 24,
        };

        let web_server_port = match env::var("WEB_SERVER_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidVar("WEB_SERVER_PORT"))?,
            Err(_) => 8080,
        };

        Ok(Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "roster-local".to_string()),
            users_collection: env::var("USERS_COLLECTION")
                .unwrap_or_else(|_| "users".to_string()),
            students_collection: env::var("STUDENTS_COLLECTION")
                .unwrap_or_else(|_| "students".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port,
            jwt_secret,
            jwt_ttl_hours,
            admin_secret: env::var("ADMIN_SECRET").ok().map(SecretString::from),
            bcrypt_cost: env::var("BCRYPT_COST")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(bcrypt::DEFAULT_COST),
        })
    }

    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "roster-test".to_string(),
            users_collection: "users".to_string(),
            students_collection: "students".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            jwt_ttl_hours: 1,
            admin_secret: Some(SecretString::from("test_admin_secret".to_string())),
            // Minimum cost keeps hashing fast in tests
            bcrypt_cost: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.mongo_conn_string, "mongodb://localhost:27017");
        assert_eq!(config.mongo_db_name, "roster-test");
        assert_eq!(config.users_collection, "users");
        assert_eq!(config.students_collection, "students");
        assert_eq!(config.jwt_ttl_hours, 1);
        assert!(config.admin_secret.is_some());
    }

    #[test]
    fn test_missing_secret_error_message() {
        let err = ConfigError::MissingVar("JWT_SECRET");
        assert!(err.to_string().contains("JWT_SECRET"));
    }
}
