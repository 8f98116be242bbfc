pub struct DefaultConfig;

impl DefaultConfig {
    pub fn create_default_config_file() -> String {
        r#"[connection]
host = "localhost"
port = "11434"
# Seconds; 0 keeps the HTTP client's default behaviour
timeout_secs = 0

[generation]
# Preselected model, e.g. "llama2". Empty means choose per prompt.
model = ""

[output]
use_colors = true
show_spinner = true
"#
        .to_string()
    }
}
