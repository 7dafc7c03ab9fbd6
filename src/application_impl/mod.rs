mod auth_service_impl;
mod password_encoder_impl;
mod role_source_username;
mod user_details_service_impl;

pub use auth_service_impl::*;
pub use password_encoder_impl::*;
pub use role_source_username::*;
pub use user_details_service_impl::*;
