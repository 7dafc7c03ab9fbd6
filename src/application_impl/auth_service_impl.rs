use crate::application_impl::DelegatingPasswordEncoder;
use crate::application_port::*;
use crate::domain_model::Principal;
use crate::logger::*;
use std::sync::Arc;

pub struct RealAuthService {
    user_details_service: Arc<dyn UserDetailsService>,
    password_encoder: Arc<DelegatingPasswordEncoder>,
}

impl RealAuthService {
    pub fn new(
        user_details_service: Arc<dyn UserDetailsService>,
        password_encoder: Arc<DelegatingPasswordEncoder>,
    ) -> Self {
        Self {
            user_details_service,
            password_encoder,
        }
    }
}

#[async_trait::async_trait]
impl AuthService for RealAuthService {
    async fn authenticate(&self, request: LoginInput) -> Result<Principal, AuthError> {
        let principal = match self
            .user_details_service
            .load_user_by_username(&request.username)
            .await
        {
            Ok(principal) => principal,
            Err(AuthError::UserNotFound(username)) => {
                debug!(%username, "login for unknown user");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(e),
        };

        if !self
            .password_encoder
            .matches(&request.password, &principal.password)
            .await?
        {
            debug!(username = %principal.username, "password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        info!(username = %principal.username, "authenticated");
        Ok(principal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application_impl::{NoOpPasswordEncoder, RealUserDetailsService, UsernameRoleSource};
    use crate::domain_model::{Authority, UserRecord};
    use crate::infra_memory::{MemoryUserRepo, StaticAccessControlProvider};

    fn auth_service() -> RealAuthService {
        let noop = Arc::new(NoOpPasswordEncoder::new());
        let user_details_service = Arc::new(RealUserDetailsService::new(
            Arc::new(MemoryUserRepo::from_records(vec![UserRecord::new(
                1, "alice", "secret",
            )])),
            Arc::new(UsernameRoleSource::new()),
            Arc::new(StaticAccessControlProvider::new().with_group("alice", ["READ"])),
            noop.clone(),
        ));
        RealAuthService::new(
            user_details_service,
            Arc::new(DelegatingPasswordEncoder::new().with(noop)),
        )
    }

    fn login(username: &str, password: &str) -> LoginInput {
        LoginInput {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn correct_password_returns_principal() {
        let principal = auth_service()
            .authenticate(login("alice", "secret"))
            .await
            .unwrap();
        assert_eq!(principal.username, "alice");
        assert!(principal.authorities.contains(&Authority::from("READ")));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_look_the_same() {
        let service = auth_service();
        assert!(matches!(
            service.authenticate(login("alice", "nope")).await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            service.authenticate(login("ghost", "secret")).await,
            Err(AuthError::InvalidCredentials)
        ));
    }
}
