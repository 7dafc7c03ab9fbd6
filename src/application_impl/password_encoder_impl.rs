use crate::application_port::*;
use crate::domain_model::EncodedPassword;
use std::collections::HashMap;
use std::sync::Arc;

/// Stores and compares passwords as cleartext. Only suitable until real
/// credential hashing is wired in.
#[derive(Debug, Default)]
pub struct NoOpPasswordEncoder;

impl NoOpPasswordEncoder {
    pub const ID: &'static str = "noop";

    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl PasswordEncoder for NoOpPasswordEncoder {
    fn id(&self) -> &str {
        Self::ID
    }

    async fn encode(&self, raw: &str) -> Result<String, AuthError> {
        Ok(raw.to_string())
    }

    async fn matches(&self, raw: &str, encoded: &str) -> Result<bool, AuthError> {
        Ok(raw == encoded)
    }
}

/// Verifies `{id}encoded` values with the encoder registered under `id`.
#[derive(Default)]
pub struct DelegatingPasswordEncoder {
    encoders: HashMap<String, Arc<dyn PasswordEncoder>>,
}

impl DelegatingPasswordEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, encoder: Arc<dyn PasswordEncoder>) -> Self {
        self.encoders.insert(encoder.id().to_string(), encoder);
        self
    }

    pub async fn matches(&self, raw: &str, stored: &EncodedPassword) -> Result<bool, AuthError> {
        let (id, encoded) = stored.split().ok_or_else(|| {
            AuthError::InternalError("stored password has no encoder id".to_string())
        })?;
        let encoder = self.encoders.get(id).ok_or_else(|| {
            AuthError::InternalError(format!("no password encoder mapped for id {id}"))
        })?;
        encoder.matches(raw, encoded).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delegating() -> DelegatingPasswordEncoder {
        DelegatingPasswordEncoder::new().with(Arc::new(NoOpPasswordEncoder::new()))
    }

    #[tokio::test]
    async fn noop_round_trip() {
        let encoder = NoOpPasswordEncoder::new();
        let encoded = encoder.encode("secret").await.unwrap();
        assert_eq!(encoded, "secret");
        assert!(encoder.matches("secret", &encoded).await.unwrap());
        assert!(!encoder.matches("Secret", &encoded).await.unwrap());
    }

    #[tokio::test]
    async fn delegates_on_prefix() {
        let stored = EncodedPassword::new("noop", "secret");
        assert!(delegating().matches("secret", &stored).await.unwrap());
        assert!(!delegating().matches("wrong", &stored).await.unwrap());
    }

    #[tokio::test]
    async fn unknown_or_missing_id_is_internal_error() {
        let unknown = EncodedPassword::new("bcrypt", "$2a$10$abc");
        assert!(matches!(
            delegating().matches("secret", &unknown).await,
            Err(AuthError::InternalError(_))
        ));

        let bare = EncodedPassword::from_raw("secret");
        assert!(matches!(
            delegating().matches("secret", &bare).await,
            Err(AuthError::InternalError(_))
        ));
    }
}
