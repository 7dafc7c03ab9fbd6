use crate::domain_model::Principal;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("store error: {0}")]
    Store(String),
    #[error("internal error: {0}")]
    InternalError(String),
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Checks a username/password pair and returns the resolved principal.
    /// Unknown users and wrong passwords both yield `InvalidCredentials`.
    async fn authenticate(&self, request: LoginInput) -> Result<Principal, AuthError>;
}
