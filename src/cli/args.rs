use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ollama-prompt")]
#[command(about = "Send a prompt to a local Ollama server and print the response")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Cli {
    /// The prompt to send
    pub prompt: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Ollama server host or IP address
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Ollama server port
    #[arg(short, long, global = true)]
    pub port: Option<String>,

    /// Model to generate with (see `models`)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Read settings from this file instead of ~/.ollama-prompt/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill in and submit prompts interactively
    Form,
    /// List the suggested models
    Models,
    /// Show configuration
    Config {
        /// Write the default config file if none exists
        #[arg(long)]
        init: bool,
    },
    /// Show version information
    Version,
}

/// Per-invocation overrides layered over the settings file.
#[derive(Debug, Clone, Default)]
pub struct ConnectionOverrides {
    pub host: Option<String>,
    pub port: Option<String>,
    pub model: Option<String>,
    pub no_color: bool,
}

impl From<&Cli> for ConnectionOverrides {
    fn from(cli: &Cli) -> Self {
        Self {
            host: cli.host.clone(),
            port: cli.port.clone(),
            model: cli.model.clone(),
            no_color: cli.no_color,
        }
    }
}
