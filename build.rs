use std::env;

fn main() {
    // Exposed to `ollama-prompt version`
    println!(
        "cargo:rustc-env=CARGO_PKG_RUST_VERSION={}",
        env::var("RUSTC_VERSION").unwrap_or_else(|_| "unknown".to_string())
    );
    println!("cargo:rerun-if-env-changed=RUSTC_VERSION");
}
