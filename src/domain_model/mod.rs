mod access_control;
mod principal;
mod user;

pub use access_control::*;
pub use principal::*;
pub use user::*;
