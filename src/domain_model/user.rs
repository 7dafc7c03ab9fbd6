/// A stored user as returned by a [`UserRepo`](crate::domain_port::UserRepo).
///
/// `password` is whatever the store holds. Today that is cleartext, which is
/// why the resolver marks it with the no-op encoder id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

impl UserRecord {
    pub fn new(id: i64, username: impl Into<String>, password: impl Into<String>) -> Self {
        UserRecord {
            id,
            username: username.into(),
            password: password.into(),
            name: None,
            phone_number: None,
        }
    }
}
