use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use tokio::sync::RwLock;

/// Keeps records in insertion order. Duplicate usernames are accepted so the
/// resolver's first-wins behaviour can be exercised.
#[derive(Default)]
pub struct MemoryUserRepo {
    records: RwLock<Vec<UserRecord>>,
}

impl MemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<UserRecord>) -> Self {
        MemoryUserRepo {
            records: RwLock::new(records),
        }
    }

    pub async fn insert(&self, record: UserRecord) {
        self.records.write().await.push(record);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl UserRepo for MemoryUserRepo {
    async fn find_by_username(&self, username: &str) -> Result<Vec<UserRecord>, AuthError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.username == username)
            .cloned()
            .collect())
    }
}
