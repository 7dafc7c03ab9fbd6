//! Settings loaded from TOML through `config`, plus the CLI flag pointing at them.
//! See `bin/settings_demo.rs`.

mod cli;
pub use clap::Parser;
pub use cli::*;

mod settings;
pub use settings::*;
