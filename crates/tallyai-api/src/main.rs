//! TallyAI CLI and web server entry point.
//!
//! Binary name: `tallyai`
//!
//! Parses CLI arguments, loads configuration, then dispatches to the
//! appropriate command handler or starts the web server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use tallyai_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need tracing or app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "tallyai", &mut std::io::stdout());
        return Ok(());
    }

    init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let (data_dir, mut config) = AppState::load_config().await;
    cli.apply_overrides(&mut config);
    let state = AppState::new(config, data_dir)?;
    tracing::debug!(data_dir = %state.data_dir.display(), "configuration loaded");

    match cli.command {
        Commands::Serve { .. } => {
            let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            tracing::info!(%addr, tally = state.tally.endpoint(), "web server starting");
            if !cli.quiet {
                println!(
                    "  {} TallyAI listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Chats => {
            cli::chats::list_chats(state.catalog.as_ref(), cli.json)?;
        }

        Commands::Tally { action } => {
            cli::tally::run(&state.tally, action, cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled in main"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
