use anyhow::Result;
use clap::Parser;
use log::error;

use ollama_prompt::cli::ConnectionOverrides;
use ollama_prompt::{Cli, CommandHandler, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Errors only unless --verbose; RUST_LOG still wins
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Error
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    // Handle version early
    if matches!(cli.command, Some(Commands::Version)) {
        println!(
            "ollama-prompt {}\nRust version: {}\nPlatform: {}-{}",
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_RUST_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH
        );
        return Ok(());
    }

    let overrides = ConnectionOverrides::from(&cli);
    let mut handler = match CommandHandler::new(cli.config.clone(), overrides) {
        Ok(h) => h,
        Err(e) => {
            error!("Failed to initialize: {e:#}");
            eprintln!("Error: Failed to initialize ollama-prompt: {e:#}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(command) => match handler.handle_command(command).await {
            Ok(output) => println!("{output}"),
            Err(e) => {
                error!("Command failed: {e:#}");
                eprintln!("{}", handler.format_error(&format!("{e:#}")));
                std::process::exit(1);
            }
        },
        None => {
            if let Some(ref prompt) = cli.prompt {
                let outcome = handler.handle_prompt(prompt).await;
                if outcome.is_success() {
                    println!("{}", handler.format_outcome(&outcome));
                } else {
                    error!("Submission failed: {}", outcome.text());
                    eprintln!("{}", handler.format_outcome(&outcome));
                    std::process::exit(1);
                }
            } else {
                let help = r#"ollama-prompt - Send a prompt to a local Ollama server

Usage:
  ollama-prompt [OPTIONS] <PROMPT>
  ollama-prompt [COMMAND]

Examples:
  ollama-prompt -m llama2 "why is the sky blue?"
  ollama-prompt --host 192.168.1.20 --port 11434 -m mistral "hello"
  ollama-prompt form

Commands:
  form      Fill in and submit prompts interactively
  models    List the suggested models
  config    Show configuration (--init writes the default file)
  version   Show version information
  help      Show this help message

Options:
      --host <HOST>     Ollama server host [default: localhost]
  -p, --port <PORT>     Ollama server port [default: 11434]
  -m, --model <MODEL>   Model to generate with
      --config <PATH>   Settings file
      --no-color        Disable colored output
  -v, --verbose         Verbose output
  -h, --help            Print help
"#;
                println!("{help}");
            }
        }
    }

    Ok(())
}
