//! CLI command definitions for the `tallyai` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chats;
pub mod tally;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use tallyai_types::config::GlobalConfig;

/// Chat front-end and Tally accounting tools.
#[derive(Parser)]
#[command(name = "tallyai", version, about, long_about = None)]
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

    /// Also export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Tally server base URL, without port.
    #[arg(long, global = true, env = "TALLYAI_TALLY_URL")]
    pub tally_url: Option<String>,

    /// Tally server port.
    #[arg(long, global = true, env = "TALLYAI_TALLY_PORT")]
    pub tally_port: Option<u16>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server.
    Serve {
        /// Address to bind.
        #[arg(long, env = "TALLYAI_HOST")]
        host: Option<String>,

        /// Port to listen on.
        #[arg(short, long, env = "TALLYAI_PORT")]
        port: Option<u16>,
    },

    /// List past chats shown in the sidebar.
    Chats,

    /// Query a Tally server.
    Tally {
        #[command(subcommand)]
        action: tally::TallyCommand,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Apply command-line overrides on top of `config.toml`.
    pub fn apply_overrides(&self, config: &mut GlobalConfig) {
        if let Some(url) = &self.tally_url {
            config.tally.url = url.clone();
        }
        if let Some(port) = self.tally_port {
            config.tally.port = port;
        }
        if let Commands::Serve { host, port } = &self.command {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
        }
    }
}
