use crate::domain_model::*;

#[async_trait::async_trait]
pub trait AccessControlProvider: Send + Sync {
    /// Expands an access-control id into the access controls it grants.
    /// Returns `None` when the id is not defined.
    async fn expand(&self, id: &str) -> Option<AccessControlSet>;
}
