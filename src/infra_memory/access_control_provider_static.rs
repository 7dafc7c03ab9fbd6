use crate::domain_model::*;
use crate::domain_port::*;
use std::collections::HashMap;

/// Table driven provider: each id maps to a fixed set of access controls.
/// It does not follow inheritance between ids.
#[derive(Debug, Default, Clone)]
pub struct StaticAccessControlProvider {
    table: HashMap<String, AccessControlSet>,
}

impl StaticAccessControlProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group<I, S>(mut self, id: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.define(id, permissions);
        self
    }

    /// Defines or replaces `id`. An empty permission list still counts as
    /// defined and expands to the empty set.
    pub fn define<I, S>(&mut self, id: impl Into<String>, permissions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = permissions
            .into_iter()
            .map(AccessControl::new)
            .collect();
        self.table.insert(id.into(), set);
    }
}

#[async_trait::async_trait]
impl AccessControlProvider for StaticAccessControlProvider {
    async fn expand(&self, id: &str) -> Option<AccessControlSet> {
        self.table.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn expands_defined_ids_only() {
        let provider = StaticAccessControlProvider::new()
            .with_group("alice", ["READ", "WRITE"])
            .with_group("empty", Vec::<String>::new());

        let set = provider.expand("alice").await.unwrap();
        assert_eq!(
            set.into_iter().map(|a| a.0).collect::<Vec<_>>(),
            vec!["READ".to_string(), "WRITE".to_string()]
        );
        assert_eq!(provider.expand("empty").await, Some(AccessControlSet::new()));
        assert_eq!(provider.expand("bob").await, None);
    }
}
