use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use job_board::{
    config::Config,
    database::Database,
    graphql,
    web::{AppState, WebServer},
};

#[derive(Parser)]
#[command(name = "job-board")]
#[command(version)]
#[command(about = "A job board backend serving postings and applications over GraphQL")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP", global = true)]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT", global = true)]
    port: Option<u16>,

    /// Database URL (overrides config file)
    #[arg(short = 'd', long, value_name = "URL", global = true)]
    database_url: Option<String>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy, Default)]
enum Command {
    /// Connect, apply migrations and serve the GraphQL API (default)
    #[default]
    Serve,
    /// Apply pending migrations and exit
    Migrate,
    /// Print the GraphQL schema in SDL form and exit
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("job_board={},tower_http=trace", cli.log_level)
    } else {
        format!("job_board={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = cli.command.unwrap_or_default();
    if let Command::Schema = command {
        println!("{}", graphql::sdl());
        return Ok(());
    }

    info!("Starting Job Board v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    info!("Using database: {}", config.database.url);

    let database = Database::new(&config.database).await?;
    database.migrate().await?;
    info!("Database connection established and migrations applied");

    if let Command::Migrate = command {
        return Ok(());
    }

    let web_server = WebServer::new(AppState::new(database, config))?;
    info!(
        "Starting web server on {}:{}",
        web_server.host(),
        web_server.port()
    );

    // Create a channel to signal when the server is ready or fails to bind
    let (server_ready_tx, server_ready_rx) = tokio::sync::oneshot::channel();

    let server_handle = tokio::spawn(async move {
        if let Err(e) = web_server.serve_with_signal(server_ready_tx).await {
            tracing::error!("Web server failed: {}", e);
        }
    });

    match server_ready_rx.await {
        Ok(Ok(())) => info!("Web server is now listening"),
        Ok(Err(bind_error)) => {
            tracing::error!("Failed to bind web server: {}", bind_error);
            return Err(bind_error);
        }
        Err(_) => {
            tracing::error!("Web server task completed without signaling");
            return Err(anyhow::anyhow!("Web server failed to start"));
        }
    }

    server_handle.await.context("Web server task panicked")?;
    info!("Job Board stopped");
    Ok(())
}

/// Load the config file and apply CLI overrides on top of it
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_from_file(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    if let Some(host) = &cli.host {
        config.web.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(database_url) = &cli.database_url {
        config.database.url = database_url.clone();
    }

    config.validate()?;
    Ok(config)
}
