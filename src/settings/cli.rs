use super::Parser;

#[derive(Parser, Debug)]
#[command(about = "Resolve users into principals and serve HTTP basic authentication")]
pub struct Cli {
    /// Path to a TOML settings file.
    #[arg(long)]
    pub settings: Option<String>,
}
