//! Resolves one username with the configured backends and prints the
//! principal, e.g.
//!
//! $ cargo run --bin resolve_user -- alice --settings=settings/dev.toml

use clap::Parser;
use warden::application_port::UserDetailsService;
use warden::logger::*;
use warden::server::Server;
use warden::settings::parse_settings;

#[derive(Parser, Debug)]
struct Args {
    username: String,
    #[arg(long)]
    settings: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logger = Logger::new_bootstrap();

    let settings = parse_settings(args.settings.as_deref())?;
    let server = Server::try_new(&settings).await?;

    let result = server.user_details_service.resolve_user(&args.username).await;
    server.shutdown().await;

    let resolution = result?;
    println!("username:    {}", resolution.principal.username);
    println!("password:    {:?}", resolution.principal.password);
    for authority in &resolution.principal.authorities {
        println!("authority:   {}", authority);
    }
    for warning in &resolution.warnings {
        println!("warning:     {}", warning);
    }
    Ok(())
}
