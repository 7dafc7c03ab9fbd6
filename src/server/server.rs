use crate::application_impl::*;
use crate::application_port::*;
use crate::domain_model::UserRecord;
use crate::domain_port::*;
use crate::infra_memory::*;
use crate::infra_mysql::*;
use crate::logger::*;
use crate::settings::Settings;
use sqlx::{MySql, Pool};
use std::sync::Arc;

pub struct Server {
    pub user_details_service: Arc<dyn UserDetailsService>,
    pub auth_service: Arc<dyn AuthService>,
    pool: Option<Pool<MySql>>,
}

impl Server {
    pub async fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let mut pool = None;
        let user_repo: Arc<dyn UserRepo> = match settings.user.backend.as_str() {
            "memory" => {
                let records = settings
                    .user
                    .seed
                    .iter()
                    .zip(1..)
                    .map(|(seed, id)| UserRecord {
                        id,
                        username: seed.username.clone(),
                        password: seed.password.clone(),
                        name: seed.name.clone(),
                        phone_number: seed.phone_number.clone(),
                    })
                    .collect();
                Arc::new(MemoryUserRepo::from_records(records))
            }
            "mysql" => {
                let dsn = settings
                    .user
                    .mysql_dsn
                    .as_deref()
                    .ok_or_else(|| anyhow::anyhow!("user.mysql_dsn is required for mysql"))?;
                let p = Pool::<MySql>::connect(dsn).await?;
                pool = Some(p.clone());
                Arc::new(MySqlUserRepo::new(p))
            }
            other => return Err(anyhow::anyhow!("Unknown user backend: {}", other)),
        };

        let access_control_provider: Arc<dyn AccessControlProvider> =
            match settings.access_control.backend.as_str() {
                "static" => {
                    let mut provider = StaticAccessControlProvider::new();
                    for group in &settings.access_control.groups {
                        provider.define(group.id.clone(), group.permissions.iter().cloned());
                    }
                    Arc::new(provider)
                }
                other => {
                    return Err(anyhow::anyhow!(
                        "Unknown access control backend: {}",
                        other
                    ));
                }
            };

        let password_encoder: Arc<dyn PasswordEncoder> = match settings.password.encoder.as_str()
        {
            "noop" => {
                warn!("passwords are stored and compared in cleartext");
                Arc::new(NoOpPasswordEncoder::new())
            }
            other => return Err(anyhow::anyhow!("Unknown password encoder: {}", other)),
        };
        let delegating_encoder =
            Arc::new(DelegatingPasswordEncoder::new().with(password_encoder.clone()));

        let user_details_service: Arc<dyn UserDetailsService> =
            Arc::new(RealUserDetailsService::new(
                user_repo,
                Arc::new(UsernameRoleSource::new()),
                access_control_provider,
                password_encoder,
            ));

        let auth_service: Arc<dyn AuthService> = Arc::new(RealAuthService::new(
            user_details_service.clone(),
            delegating_encoder,
        ));

        info!(
            user_backend = %settings.user.backend,
            access_control_backend = %settings.access_control.backend,
            "server started"
        );

        Ok(Self {
            user_details_service,
            auth_service,
            pool,
        })
    }

    pub async fn shutdown(&self) {
        info!("server shutting down...");

        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::parse_settings_str;

    const MEMORY: &str = r#"
[access_control]
backend = "static"

[[access_control.groups]]
id = "alice"
permissions = ["READ"]

[http]
address = "127.0.0.1:0"

[log]
filter = "info"

[password]
encoder = "noop"

[user]
backend = "memory"

[[user.seed]]
username = "alice"
password = "secret"
"#;

    #[tokio::test]
    async fn builds_memory_backends_from_settings() {
        let settings = parse_settings_str(MEMORY).unwrap();
        let server = Server::try_new(&settings).await.unwrap();

        let principal = server
            .user_details_service
            .load_user_by_username("alice")
            .await
            .unwrap();
        assert_eq!(principal.password.as_str(), "{noop}secret");

        let principal = server
            .auth_service
            .authenticate(LoginInput {
                username: "alice".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();
        assert!(principal.has_authority("READ"));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn unknown_backends_are_rejected() {
        let settings = parse_settings_str(&MEMORY.replace("\"memory\"", "\"ldap\"")).unwrap();
        assert!(Server::try_new(&settings).await.is_err());

        let settings = parse_settings_str(&MEMORY.replace("\"noop\"", "\"md5\"")).unwrap();
        assert!(Server::try_new(&settings).await.is_err());

        let settings = parse_settings_str(&MEMORY.replace("\"static\"", "\"ldap\"")).unwrap();
        assert!(Server::try_new(&settings).await.is_err());
    }
}
