pub mod auth;
pub mod config;
pub mod devices;
pub mod dispatch;
pub mod error;
pub mod exec;
pub mod server;
pub mod util;

// === CLI entrypoint ===
pub mod cli;

/// Entrypoint used by `main.rs` and tests to run the full CLI.
pub async fn run_cli() -> anyhow::Result<()> {
    cli::cli().await
}
