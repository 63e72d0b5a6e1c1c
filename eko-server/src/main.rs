use eko_server::{Config, Server, ServerState, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment and logging
    dotenv::dotenv().ok();
    let config = Config::from_env();
    config.ensure_work_dir_structure()?;
    eko_server::init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        Some(&config.log_dir().to_string_lossy()),
    );

    print_banner();
    tracing::info!("Eko server starting...");

    // 2. Initialize server state
    let state = ServerState::initialize(&config).await?;

    // 3. Run the HTTP server until shutdown
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
