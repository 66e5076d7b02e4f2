use clap::Parser;
use echo_server::utils::{logger, validation::Validate};
use echo_server::{server, ServerConfig};

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting echo-server");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    let addr = config.listen_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!("Listening on {}", addr);

    if let Err(e) = server::serve(listener).await {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }
}
