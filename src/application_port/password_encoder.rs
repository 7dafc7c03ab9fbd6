use crate::application_port::AuthError;

#[async_trait::async_trait]
pub trait PasswordEncoder: Send + Sync {
    /// The id written between braces in front of encoded values.
    fn id(&self) -> &str;
    async fn encode(&self, raw: &str) -> Result<String, AuthError>;
    async fn matches(&self, raw: &str, encoded: &str) -> Result<bool, AuthError>;
}
