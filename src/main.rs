// Main

use std::sync::Arc;

use u2f_session_id::{
    log::{LogConfig, Logger},
    log_info,
    session::{run_issuer, CounterSessionIdGenerator, SessionIssuer, SessionIssuerConfiguration},
};

/// Main function
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load .env
    let _ = dotenvy::dotenv();

    // Initialize logger

    let logger = Logger::new(LogConfig::load_from_env());

    // Print version

    const VERSION: &str = env!("CARGO_PKG_VERSION");

    log_info!(logger, "U2F session ID issuer ({VERSION})");

    // Load configuration

    let config = SessionIssuerConfiguration::load_from_env(&logger);

    // Run issuer

    let generator = Arc::new(CounterSessionIdGenerator::new());

    let issuer = SessionIssuer::new(
        Arc::new(logger.make_child_logger("[ISSUER] ")),
        config,
        generator.clone(),
    );

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let output = tokio::io::stdout();

    if run_issuer(&issuer, input, output).await.is_err() {
        std::process::exit(1);
    }

    log_info!(logger, "Issued {} session IDs", generator.issued_count());

    // End of main

    Ok(())
}
