use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use crate::logger::*;
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorityResolution {
    pub authorities: BTreeSet<Authority>,
    pub warnings: Vec<RoleExpansionWarning>,
}

pub struct RealUserDetailsService {
    user_repo: Arc<dyn UserRepo>,
    role_source: Arc<dyn RoleSource>,
    access_control_provider: Arc<dyn AccessControlProvider>,
    password_encoder: Arc<dyn PasswordEncoder>,
}

impl RealUserDetailsService {
    pub fn new(
        user_repo: Arc<dyn UserRepo>,
        role_source: Arc<dyn RoleSource>,
        access_control_provider: Arc<dyn AccessControlProvider>,
        password_encoder: Arc<dyn PasswordEncoder>,
    ) -> Self {
        Self {
            user_repo,
            role_source,
            access_control_provider,
            password_encoder,
        }
    }

    /// Expands every role of `username` and collects the resulting
    /// authorities. Undefined role-ids are skipped and reported.
    pub async fn resolve_authorities(
        &self,
        username: &str,
    ) -> Result<AuthorityResolution, AuthError> {
        let role_ids = self.role_source.roles_of(username).await?;

        let mut access_controls = AccessControlSet::new();
        let mut warnings = Vec::new();
        for role_id in role_ids {
            match self.access_control_provider.expand(&role_id).await {
                Some(expanded) => access_controls.extend(expanded),
                None => {
                    warn!("Undefined access control {}.", role_id);
                    warnings.push(RoleExpansionWarning { role_id });
                }
            }
        }

        Ok(AuthorityResolution {
            authorities: access_controls.into_iter().map(Authority::from).collect(),
            warnings,
        })
    }
}

#[async_trait::async_trait]
impl UserDetailsService for RealUserDetailsService {
    async fn resolve_user(&self, username: &str) -> Result<Resolution, AuthError> {
        let mut users = self.user_repo.find_by_username(username).await?;
        if users.is_empty() {
            return Err(AuthError::UserNotFound(username.to_string()));
        }
        if users.len() > 1 {
            // Usernames should be unique; keep the first match.
            warn!(username, count = users.len(), "duplicate user records, using the first");
        }
        let user = users.swap_remove(0);

        let AuthorityResolution {
            authorities,
            warnings,
        } = self.resolve_authorities(username).await?;

        let encoded = self.password_encoder.encode(&user.password).await?;
        let password = EncodedPassword::new(self.password_encoder.id(), &encoded);

        debug!(username, authorities = authorities.len(), "user resolved");

        Ok(Resolution {
            principal: Principal {
                username: user.username,
                password,
                authorities,
            },
            warnings,
        })
    }
}
