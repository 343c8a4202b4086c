use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::{Claims, PasswordHasher, TokenCodec},
    errors::{AppError, AppResult},
    models::{
        domain::{Identity, Role, User},
        dto::request::{LoginRequest, RegisterRequest},
    },
    repositories::UserRepository,
};

/// Credential issuance and subject resolution. Owns the only uses of the
/// password hasher and the token codec outside of tests.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    codec: Arc<dyn TokenCodec>,
    admin_secret: Option<SecretString>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        codec: Arc<dyn TokenCodec>,
        admin_secret: Option<SecretString>,
    ) -> Self {
        Self {
            users,
            hasher,
            codec,
            admin_secret,
        }
    }

    /// Creates an account and issues its first token. The password is hashed
    /// before it is persisted; the plaintext never leaves this call. Role
    /// defaults to `student`; requesting `admin` hard-fails unless the
    /// provisioning secret is configured and matched.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<(Identity, String)> {
        let email = request.email.trim().to_lowercase();

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::AlreadyExists("Email already in use".to_string()));
        }

        let role = self.resolve_role(request.role, request.admin_secret.as_deref())?;

        let hashed = self.hasher.hash(&request.password)?;
        let user = self
            .users
            .insert(User::new(request.name.trim(), &email, &hashed, role))
            .await?;

        let identity = user.identity()?;
        let token = self.codec.issue(&identity)?;

        log::info!("registered {} account for {}", role.as_str(), identity.id);

        Ok((identity, token))
    }

    /// Verifies credentials and issues a token. Unknown email and wrong
    /// password are deliberately indistinguishable to the caller.
    pub async fn login(&self, request: LoginRequest) -> AppResult<(Identity, String)> {
        let email = request.email.trim().to_lowercase();

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !self.hasher.verify(&request.password, &user.password)? {
            return Err(AppError::InvalidCredentials);
        }

        let identity = user.identity()?;
        let token = self.codec.issue(&identity)?;

        Ok((identity, token))
    }

    pub fn verify_token(&self, token: &str) -> AppResult<Claims> {
        self.codec.verify(token)
    }

    /// Resolves a token subject to a live store record. A subject that no
    /// longer exists (or never parsed as an id) is rejected the same way.
    pub async fn resolve_identity(&self, subject: &str) -> AppResult<Identity> {
        let id = ObjectId::parse_str(subject).map_err(|_| AppError::UnknownSubject)?;

        let user = self
            .users
            .find_by_id(&id)
            .await?
            .ok_or(AppError::UnknownSubject)?;

        user.identity()
    }

    fn resolve_role(&self, requested: Option<Role>, proof: Option<&str>) -> AppResult<Role> {
        match requested {
            Some(Role::Admin) => {
                let configured = self
                    .admin_secret
                    .as_ref()
                    .ok_or(AppError::AdminProofRejected)?;
                match proof {
                    Some(supplied) if supplied == configured.expose_secret() => Ok(Role::Admin),
                    _ => Err(AppError::AdminProofRejected),
                }
            }
            _ => Ok(Role::Student),
        }
    }
}
