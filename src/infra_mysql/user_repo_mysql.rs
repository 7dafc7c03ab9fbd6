use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

pub struct MySqlUserRepo {
    pool: MySqlPool,
}

impl MySqlUserRepo {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlUserRepo { pool }
    }

    fn row_to_record(row: MySqlRow) -> Result<UserRecord, AuthError> {
        Ok(UserRecord {
            id: decoded("id", row.try_get("id"))?,
            username: decoded("username", row.try_get("username"))?,
            password: decoded("password", row.try_get("password"))?,
            name: decoded("name", row.try_get("name"))?,
            phone_number: decoded("phone_number", row.try_get("phone_number"))?,
        })
    }
}

fn decoded<T>(column: &str, value: Result<T, sqlx::Error>) -> Result<T, AuthError> {
    value.map_err(|e| AuthError::Store(format!("decode user_account.{column}: {e}")))
}

#[async_trait::async_trait]
impl UserRepo for MySqlUserRepo {
    async fn find_by_username(&self, username: &str) -> Result<Vec<UserRecord>, AuthError> {
        // BINARY keeps the match case-sensitive under the default collation.
        let rows = sqlx::query(
            r#"
SELECT id, username, password, name, phone_number
FROM user_account
WHERE username = BINARY ?
ORDER BY id
"#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AuthError::Store(format!("query user_account: {e}")))?;

        rows.into_iter()
            .map(Self::row_to_record)
            .collect::<Result<Vec<_>, _>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::mysql::MySqlPoolOptions;
    use std::time::Duration;

    #[test]
    fn column_mismatch_becomes_store_error() {
        let mismatch: Result<i64, sqlx::Error> = Err(sqlx::Error::ColumnDecode {
            index: "\"id\"".to_string(),
            source: "mismatched types; `i64` is not compatible with `BIGINT UNSIGNED`".into(),
        });

        match decoded("id", mismatch) {
            Err(AuthError::Store(message)) => {
                assert!(message.starts_with("decode user_account.id:"));
            }
            other => panic!("expected Store error, got {:?}", other),
        }
        let name = decoded("name", Ok(Some("Alice".to_string()))).unwrap();
        assert_eq!(name.as_deref(), Some("Alice"));
    }

    #[tokio::test]
    async fn unreachable_database_is_store_error() {
        let pool = MySqlPoolOptions::new()
            .acquire_timeout(Duration::from_millis(500))
            .connect_lazy("mysql://warden_app:pw@127.0.0.1:1/warden_db")
            .unwrap();
        let repo = MySqlUserRepo::new(pool);

        assert!(matches!(
            repo.find_by_username("alice").await,
            Err(AuthError::Store(_))
        ));
    }
}
