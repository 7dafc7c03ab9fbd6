mod access_control_provider;
mod role_source;
mod user_repo;

pub use access_control_provider::*;
pub use role_source::*;
pub use user_repo::*;
