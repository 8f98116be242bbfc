use anyhow::{Context, Result};
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Input, Select};
use log::{debug, info};
use std::path::PathBuf;

use crate::ai::{OllamaClient, AVAILABLE_MODELS};
use crate::cli::{Commands, ConnectionOverrides, OutputFormatter, Spinner};
use crate::config::{DefaultConfig, Settings};
use crate::session::{Outcome, PromptForm};

const NO_MODEL_LABEL: &str = "Select a model";

pub struct CommandHandler {
    form: PromptForm,
    ai_client: OllamaClient,
    settings: Settings,
    config_path: PathBuf,
    use_colors: bool,
    formatter: OutputFormatter,
}

impl CommandHandler {
    pub fn new(config_path: Option<PathBuf>, overrides: ConnectionOverrides) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => Settings::default_config_path()?,
        };
        let settings = Settings::load_from(&config_path)?;
        let ai_client = OllamaClient::from_settings(&settings)?;
        let use_colors = settings.output.use_colors && !overrides.no_color;
        let formatter = OutputFormatter::new(use_colors);

        let mut form = PromptForm::new(settings.connection_target(), settings.request_parameters());
        if let Some(host) = overrides.host {
            form.target.host = host;
        }
        if let Some(port) = overrides.port {
            form.target.port = port;
        }
        if let Some(model) = overrides.model {
            form.params.model = model;
        }

        Ok(Self {
            form,
            ai_client,
            settings,
            config_path,
            use_colors,
            formatter,
        })
    }

    /// Runs one submission cycle for `prompt` with the current target and model.
    pub async fn handle_prompt(&mut self, prompt: &str) -> Outcome {
        self.form.params.prompt = prompt.to_string();
        self.submit().await
    }

    async fn submit(&mut self) -> Outcome {
        debug!(
            "Submitting to {}:{} with model '{}'",
            self.form.target.host, self.form.target.port, self.form.params.model
        );

        // Validation failures never reach the spinner
        let spinner = self
            .form
            .params
            .is_submittable()
            .then(|| Spinner::new("Generating...", self.settings.output.show_spinner));

        let outcome = self.form.submit(&self.ai_client).await.clone();

        if let Some(spinner) = spinner {
            spinner.stop();
        }
        outcome
    }

    pub async fn handle_command(&mut self, command: Commands) -> Result<String> {
        match command {
            Commands::Form => self.handle_form().await,
            Commands::Models => Ok(self.handle_models()),
            Commands::Config { init } => self.handle_config(init),
            Commands::Version => Ok(self.handle_version()),
        }
    }

    async fn handle_form(&mut self) -> Result<String> {
        info!("Starting interactive form");

        let theme: Box<dyn Theme> = if self.use_colors {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };

        let mut submissions = 0usize;
        loop {
            self.fill_form(theme.as_ref())?;

            let outcome = self.submit().await;
            submissions += 1;
            println!("{}\n", self.format_outcome(&outcome));

            let again = Confirm::with_theme(theme.as_ref())
                .with_prompt("Send another prompt?")
                .default(true)
                .interact()
                .context("Failed to read answer")?;
            if !again {
                break;
            }
        }

        Ok(self
            .formatter
            .format_info(&format!("{submissions} prompt(s) sent")))
    }

    fn fill_form(&mut self, theme: &dyn Theme) -> Result<()> {
        self.form.target.host = Input::with_theme(theme)
            .with_prompt("IP Address")
            .default(self.form.target.host.clone())
            .interact_text()
            .context("Failed to read host")?;

        self.form.target.port = Input::with_theme(theme)
            .with_prompt("Port")
            .default(self.form.target.port.clone())
            .interact_text()
            .context("Failed to read port")?;

        let mut items: Vec<&str> = vec![NO_MODEL_LABEL];
        items.extend(AVAILABLE_MODELS.iter().copied());
        // Keep a model given on the command line selectable
        let current = self.form.params.model.clone();
        if !current.is_empty() && !AVAILABLE_MODELS.contains(&current.as_str()) {
            items.push(current.as_str());
        }
        let selected = items
            .iter()
            .position(|m| !current.is_empty() && *m == current)
            .unwrap_or(0);

        let choice = Select::with_theme(theme)
            .with_prompt("Model")
            .items(&items)
            .default(selected)
            .interact()
            .context("Failed to read model")?;
        self.form.params.model = if choice == 0 {
            String::new()
        } else {
            items[choice].to_string()
        };

        self.form.params.prompt = Input::with_theme(theme)
            .with_prompt("Prompt")
            .with_initial_text(self.form.params.prompt.clone())
            .allow_empty(true)
            .interact_text()
            .context("Failed to read prompt")?;

        Ok(())
    }

    fn handle_models(&self) -> String {
        self.formatter
            .format_models(AVAILABLE_MODELS, &self.form.params.model)
    }

    fn handle_config(&self, init: bool) -> Result<String> {
        let mut messages = Vec::new();

        if init {
            if self.config_path.exists() {
                messages.push(self.formatter.format_info(&format!(
                    "Config file already exists: {}",
                    self.config_path.display()
                )));
            } else {
                if let Some(parent) = self.config_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&self.config_path, DefaultConfig::create_default_config_file())
                    .with_context(|| format!("Failed to write {}", self.config_path.display()))?;
                messages.push(self.formatter.format_success(&format!(
                    "Wrote {}",
                    self.config_path.display()
                )));
            }
        }

        let model = if self.form.params.model.is_empty() {
            "(none)"
        } else {
            self.form.params.model.as_str()
        };
        let timeout = match self.settings.connection.timeout_secs {
            0 => "default".to_string(),
            secs => format!("{secs}s"),
        };

        messages.push(format!(
            "Ollama Prompt Configuration:\n\
            - Config file: {}\n\
            - Endpoint: {}\n\
            - Model: {}\n\
            - Timeout: {}\n\
            - Use colors: {}\n\
            - Show spinner: {}",
            self.config_path.display(),
            self.form.target.generate_url(),
            model,
            timeout,
            self.settings.output.use_colors,
            self.settings.output.show_spinner
        ));

        Ok(messages.join("\n"))
    }

    fn handle_version(&self) -> String {
        format!(
            "ollama-prompt {}\nRust version: {}\nPlatform: {}",
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_RUST_VERSION"),
            std::env::consts::OS
        )
    }

    pub fn format_outcome(&self, outcome: &Outcome) -> String {
        self.formatter.format_outcome(outcome)
    }

    pub fn format_error(&self, message: &str) -> String {
        self.formatter.format_error(message)
    }
}
