mod error;
mod handler;
mod router;

pub use error::recover_error;
pub use handler::PrincipalView;
pub use router::{routes, with_principal};
