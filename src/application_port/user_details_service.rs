use crate::application_port::AuthError;
use crate::domain_model::Principal;
use std::fmt;

/// A role-id the access-control provider could not expand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleExpansionWarning {
    pub role_id: String,
}

impl fmt::Display for RoleExpansionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "undefined access control {}", self.role_id)
    }
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub principal: Principal,
    pub warnings: Vec<RoleExpansionWarning>,
}

#[async_trait::async_trait]
pub trait UserDetailsService: Send + Sync {
    async fn resolve_user(&self, username: &str) -> Result<Resolution, AuthError>;

    async fn load_user_by_username(&self, username: &str) -> Result<Principal, AuthError> {
        Ok(self.resolve_user(username).await?.principal)
    }
}
