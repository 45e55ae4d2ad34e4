//! Harbormaster
//!
//! Access control proxy for container engine APIs.

use clap::{Parser, Subcommand};
use harbormaster::{
    authorization::{AuthorizationService, AuthorizationServiceParameters},
    config::{AppConfig, LogFormat, load_config},
    migrator::{Migrator, MigratorParameters},
    proxy::{EngineClient, ProxyState, run_server},
    store::MemoryStore,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Harbormaster - resource access control for container engine APIs
#[derive(Parser, Debug)]
#[command(name = "harbormaster")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true, env = "HARBORMASTER_CONFIG")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error), overrides the config file
    #[arg(long, global = true, env = "HARBORMASTER_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the authorization proxy
    Serve {
        /// Bind host
        #[arg(long)]
        host: Option<String>,

        /// Bind port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Upgrade the store to the current schema version
    Migrate,
}

fn init_logging(config: &AppConfig, log_level: Option<&str>) {
    let level = log_level.unwrap_or(&config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn authorization_service(store: &Arc<MemoryStore>) -> AuthorizationService {
    AuthorizationService::new(AuthorizationServiceParameters {
        endpoints: store.clone(),
        endpoint_groups: store.clone(),
        registries: store.clone(),
        roles: store.clone(),
        team_memberships: store.clone(),
        users: store.clone(),
    })
}

fn migrator(store: &Arc<MemoryStore>) -> Migrator {
    Migrator::new(MigratorParameters {
        resource_controls: store.clone(),
        users: store.clone(),
        roles: store.clone(),
        versions: store.clone(),
        authorization_service: authorization_service(store),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    init_logging(&config, args.log_level.as_deref());

    info!(version = env!("CARGO_PKG_VERSION"), "Starting harbormaster");

    let store_path = config.store.expanded_path();
    let store = Arc::new(
        MemoryStore::open(&store_path)
            .await
            .inspect_err(|e| error!(error = %e, path = %store_path, "Failed to open store"))?,
    );

    match args.command {
        Command::Migrate => {
            let version = migrator(&store)
                .migrate()
                .await
                .inspect_err(|e| error!(error = %e, "Migration failed"))?;
            info!(version, "Store is at schema version");
        }
        Command::Serve { host, port } => {
            // Never serve from a store at an older schema
            migrator(&store)
                .migrate()
                .await
                .inspect_err(|e| error!(error = %e, "Migration failed"))?;

            let mut server = config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }

            let engine = EngineClient::new(&config.engine)
                .inspect_err(|e| error!(error = %e, "Failed to create engine client"))?;
            let state = ProxyState::from_store(engine, store)?;

            run_server(&server, state).await?;
        }
    }

    Ok(())
}
