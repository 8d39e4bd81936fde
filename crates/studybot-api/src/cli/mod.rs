//! CLI command definitions for the `studybot` binary.
//!
//! Uses clap derive macros for argument parsing. `serve` runs the web app;
//! the other commands work against the same database and rule table offline.

pub mod ask;
pub mod user;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Student helpdesk chatbot with account sign-in.
#[derive(Parser)]
#[command(name = "studybot", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server.
    Serve {
        /// Port to listen on (defaults to `port` from config.toml, then 5000).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (defaults to `host` from config.toml, then 127.0.0.1).
        #[arg(long)]
        host: Option<String>,
    },

    /// Ask the chatbot a single question without signing in.
    Ask {
        /// The question; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Print the responder's rule table in evaluation order.
    Rules {
        /// Only show rules with a needle containing this text.
        #[arg(long)]
        needle: Option<String>,
    },

    /// Manage user accounts.
    User {
        #[command(subcommand)]
        action: UserCommand,
    },

    /// Create the database and run migrations.
    InitDb,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// Register a new account.
    Add {
        /// Login name.
        username: String,

        /// Password (prompted with hidden input when omitted).
        #[arg(long, env = "STUDYBOT_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// List registered accounts.
    #[command(alias = "ls")]
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ask_joins_words() {
        let cli = Cli::try_parse_from(["studybot", "ask", "what", "are", "the", "fees"]).unwrap();
        match cli.command {
            Commands::Ask { message } => assert_eq!(message.join(" "), "what are the fees"),
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["studybot", "-vv", "serve", "--port", "8080"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, Some(8080));
                assert!(host.is_none());
            }
            _ => panic!("expected serve"),
        }
    }
}
