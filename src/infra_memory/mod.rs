mod access_control_provider_static;
mod user_repo_memory;

pub use access_control_provider_static::*;
pub use user_repo_memory::*;
