use crate::application_port::*;
use crate::domain_port::RoleSource;

/// Grants every user a single role named after the user.
///
/// Stand-in until roles come from a real identity store.
#[derive(Debug, Default)]
pub struct UsernameRoleSource;

impl UsernameRoleSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl RoleSource for UsernameRoleSource {
    async fn roles_of(&self, username: &str) -> Result<Vec<String>, AuthError> {
        Ok(vec![username.to_string()])
    }
}
