use crate::application_port::*;
use crate::domain_model::*;

#[async_trait::async_trait]
pub trait UserRepo: Send + Sync {
    /// All records whose username matches exactly, in storage order.
    /// An empty vec means no such user.
    async fn find_by_username(&self, username: &str) -> Result<Vec<UserRecord>, AuthError>;
}
