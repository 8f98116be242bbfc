use console::{style, Color};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::session::Outcome;

pub struct OutputFormatter {
    use_colors: bool,
}

/// "Generating..." indicator shown while a request is in flight.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    pub fn new(message: &str, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "]),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar: Some(bar) }
    }

    pub fn stop(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

impl OutputFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn format_outcome(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Success(text) => self.format_response(text),
            Outcome::Failure(message) => self.format_error(message),
        }
    }

    pub fn format_response(&self, text: &str) -> String {
        format!("{}\n{}", self.style_text("Response", Color::Green), text)
    }

    pub fn format_models(&self, models: &[&str], selected: &str) -> String {
        models
            .iter()
            .map(|model| {
                if *model == selected {
                    format!("{} {}", self.style_text("▶", Color::Green), model)
                } else {
                    format!("  {model}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn format_error(&self, message: &str) -> String {
        format!("{} {}", self.style_text("Error:", Color::Red), message)
    }

    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", self.style_text("✓", Color::Green), message)
    }

    pub fn format_info(&self, message: &str) -> String {
        format!("{} {}", self.style_text("ℹ", Color::Blue), message)
    }

    fn style_text(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            style(text).fg(color).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_outcomes() {
        let formatter = OutputFormatter::new(false);

        assert_eq!(
            formatter.format_outcome(&Outcome::Success("hi\nthere".to_string())),
            "Response\nhi\nthere"
        );
        assert_eq!(
            formatter.format_outcome(&Outcome::Failure("HTTP error! status: 500".to_string())),
            "Error: HTTP error! status: 500"
        );
    }

    #[test]
    fn marks_selected_model() {
        let formatter = OutputFormatter::new(false);
        let listing = formatter.format_models(&["llama2", "mistral"], "mistral");
        assert_eq!(listing, "  llama2\n▶ mistral");
    }

    #[test]
    fn disabled_spinner_is_a_no_op() {
        Spinner::new("Generating...", false).stop();
    }
}
