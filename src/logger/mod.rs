//! Global `tracing` setup with a reloadable filter.
//! See `bin/logger_demo.rs` for a binary that exercises it by hand.

mod logger;
pub use logger::*;

pub use tracing::{debug, error, info, trace, warn};
