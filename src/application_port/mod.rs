mod auth_service;
mod password_encoder;
mod user_details_service;

pub use auth_service::*;
pub use password_encoder::*;
pub use user_details_service::*;
