use warden::logger::*;

fn main() -> anyhow::Result<()> {
    let logger = Logger::new_bootstrap();
    debug!("bootstrap debug log, hidden unless RUST_LOG allows it");
    info!("bootstrap info log");
    warn!(role_id = "ghost", "Undefined access control ghost.");
    println!("bootstrap filter: {:?}", logger.current_filter());

    let config = LogConfig {
        filter: "debug".to_string(),
    };
    logger.reload_from_config(&config)?;
    trace!("application trace log");
    debug!("application debug log");
    info!("application info log");
    println!("reloaded filter: {:?}", logger.current_filter());

    let invalid = LogConfig {
        filter: "warden=loud".to_string(),
    };
    println!("invalid filter rejected: {}", logger.reload_from_config(&invalid).is_err());

    Ok(())
}
