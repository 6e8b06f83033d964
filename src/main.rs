//! Customer greeting service entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use greeting_service::api::{create_router, AppState};
use greeting_service::client::HttpGreetingClient;
use greeting_service::config::Config;
use greeting_service::metrics;
use greeting_service::mockapi::mock_router;
use greeting_service::store::lookup_email;
use greeting_service::utils::shutdown_signal;

/// Customer greeting service.
#[derive(Parser, Debug)]
#[command(name = "greeting-service")]
#[command(about = "Greets customers with a message fetched from an external API")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the greeting endpoint (default).
    Serve {
        /// Override APPLICATION_PORT.
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Serve the mocked external greeting API.
    MockApi {
        /// Override MOCK_API_PORT.
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Look up a customer's email in the datastore.
    LookupEmail {
        /// Customer identifier.
        #[arg(long)]
        id: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration (including .env) before logging so RUST_LOG applies
    let loaded = Config::load();

    // Initialize logging
    let directive = match &loaded {
        Ok(config) => config.log_directive(args.verbose),
        Err(_) if args.verbose => "greeting_service=debug,info".to_string(),
        Err(_) => "info".to_string(),
    };
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    metrics::init_metrics();

    match args.command {
        Some(Command::Serve { port }) => cmd_serve(loaded, port).await,
        Some(Command::MockApi { port }) => cmd_mock_api(loaded?, port).await,
        Some(Command::CheckConfig) => cmd_check_config(loaded),
        Some(Command::LookupEmail { id }) => cmd_lookup_email(loaded?, id).await,
        None => cmd_serve(loaded, None).await,
    }
}

/// Validate loaded configuration, logging any failure.
fn checked_config(loaded: greeting_service::Result<Config>) -> anyhow::Result<Config> {
    let config = loaded.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    Ok(config)
}

/// Serve the greeting endpoint until a shutdown signal arrives.
async fn cmd_serve(
    loaded: greeting_service::Result<Config>,
    port_override: Option<u16>,
) -> anyhow::Result<()> {
    let mut config = checked_config(loaded)?;

    if let Some(port) = port_override {
        config.application_port = port;
    }

    info!("External API: {}", config.external_api_host);

    let client = HttpGreetingClient::from_config(&config);
    let router = create_router(AppState::new(client));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.application_port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Serve the mocked greeting API until a shutdown signal arrives.
async fn cmd_mock_api(config: Config, port_override: Option<u16>) -> anyhow::Result<()> {
    let port = port_override.unwrap_or(config.mock_api_port);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Unable to start mocked server: {}", e);
        e
    })?;
    info!("Mocked greeting API listening on {}", addr);

    axum::serve(listener, mock_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Check configuration validity.
fn cmd_check_config(loaded: greeting_service::Result<Config>) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("GREETING SERVICE - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match loaded {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Application Port: {}", config.application_port);
    println!("  External API: {}", config.external_api_host);
    println!("  Mock API Port: {}", config.mock_api_port);
    println!(
        "  Datastore: {}",
        if config.database_url.is_some() { "Configured" } else { "Not configured" }
    );
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print one customer's email, or an empty line when the customer is unknown.
async fn cmd_lookup_email(config: Config, id: i64) -> anyhow::Result<()> {
    let database_url = config
        .database_url
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required"))?;

    let email = lookup_email(&database_url, id).await?;
    info!(id, found = !email.is_empty(), "Customer lookup complete");
    println!("{}", email);

    Ok(())
}
