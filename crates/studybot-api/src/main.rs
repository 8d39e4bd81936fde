//! Studybot CLI and web entry point.
//!
//! Binary name: `studybot`
//!
//! Parses CLI arguments, sets up tracing, then either answers offline
//! commands directly or initializes the database and services and dispatches
//! to the web server or account commands.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands, UserCommand};
use state::AppState;
use studybot_infra::config::database_path;
use studybot_observe::tracing_setup::{init_tracing, shutdown_tracing, LogFormat, TracingOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,studybot=debug",
        _ => "trace",
    };

    init_tracing(&TracingOptions {
        default_filter: filter.to_string(),
        format: if cli.log_json {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        },
        enable_otel: cli.otel,
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Commands that need neither the database nor the session secret
    match &cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(*shell, &mut cmd, "studybot", &mut std::io::stdout());
            return Ok(());
        }
        Commands::Ask { message } => return cli::ask::ask(message, cli.json),
        Commands::Rules { needle } => return cli::ask::list_rules(needle.as_deref(), cli.json),
        _ => {}
    }

    // Initialize application state (DB, services)
    let state = AppState::init().await?;

    match cli.command {
        Commands::Serve { port, host } => {
            let host = host.unwrap_or_else(|| state.config.host.clone());
            let port = port.unwrap_or(state.config.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(%addr, "listening");

            if !cli.quiet {
                println!();
                println!(
                    "  {} Studybot listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let sweeper = state
                .session_store
                .spawn_sweeper(http::router::SESSION_SWEEP_INTERVAL);
            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
            sweeper.abort();

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::User { action } => match action {
            UserCommand::Add { username, password } => {
                cli::user::add_user(&state, &username, password, cli.json).await?;
            }
            UserCommand::List => {
                cli::user::list_users(&state, cli.json).await?;
            }
        },

        Commands::InitDb => {
            // AppState::init already created the file and ran migrations.
            let path = database_path(&state.data_dir, &state.config);
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({ "database": path.display().to_string(), "ready": true })
                );
            } else if !cli.quiet {
                println!(
                    "  {} Database ready at {}",
                    console::style("✓").green().bold(),
                    console::style(path.display()).cyan()
                );
            }
        }

        Commands::Completions { .. } | Commands::Ask { .. } | Commands::Rules { .. } => {
            unreachable!("handled above")
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
