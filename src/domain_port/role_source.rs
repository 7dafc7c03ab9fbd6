use crate::application_port::*;

/// Where the role-ids of a user come from.
#[async_trait::async_trait]
pub trait RoleSource: Send + Sync {
    async fn roles_of(&self, username: &str) -> Result<Vec<String>, AuthError>;
}
