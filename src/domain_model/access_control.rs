use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A single access control produced by expanding a role-id.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessControl(pub String);

impl AccessControl {
    pub fn new(id: impl Into<String>) -> Self {
        AccessControl(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub type AccessControlSet = BTreeSet<AccessControl>;

/// A permission granted to a principal.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Authority(pub String);

impl Authority {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<AccessControl> for Authority {
    fn from(access_control: AccessControl) -> Self {
        Authority(access_control.0)
    }
}

impl From<&str> for Authority {
    fn from(s: &str) -> Self {
        Authority(s.to_string())
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
