use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::auth;
use crate::config::{
    Credentials, DEFAULT_API_URL, DEFAULT_CONFIG_FILE, RuntimeConfig, write_output_marker,
};
use crate::devices;
use crate::dispatch::{self, DispatchSummary};
use crate::exec::CliExecutor;
use crate::server;
use crate::util::format::format_elapsed;
use crate::util::logging::init_logging;

const BANNER: &str = "******************* @ExtremeNetworks 2023 *******************";

#[derive(Parser, Debug)]
#[command(name = "xiq")]
#[command(version, about = "Run CLI commands on ExtremeCloud IQ managed devices in parallel", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// ExtremeCloud IQ API base URL
    #[arg(long, env = "XIQ_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Print the selected devices instead of running commands on them
    #[arg(long)]
    list: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Dispatch,
    List,
}

/// What a completed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub catalog: usize,
    pub selected: usize,
    pub summary: DispatchSummary,
}

pub async fn cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let runtime = RuntimeConfig::new(&cli.api_url);
    println!("{}", BANNER);
    println!("Program Version: {}", runtime.version);
    println!();

    let credentials = Credentials::load(&cli.config).context("Error reading configuration")?;
    let mode = if cli.list {
        RunMode::List
    } else {
        RunMode::Dispatch
    };

    let report = run(&runtime, &credentials, mode).await?;
    info!(
        catalog = report.catalog,
        selected = report.selected,
        processed = report.summary.processed,
        failed = report.summary.failed,
        printed = report.summary.printed,
        "Run complete"
    );
    Ok(())
}

/// Login, fetch the catalog, select targets, then dispatch or list them.
pub async fn run(
    runtime: &RuntimeConfig,
    credentials: &Credentials,
    mode: RunMode,
) -> Result<RunReport> {
    if let Some(path) = &credentials.file {
        write_output_marker(path).context("Error writing to file")?;
        println!("Output written to {}", path.display());
    }

    let client = server::get_client().context("Failed to build HTTP client")?;
    let token = auth::login(
        &client,
        &runtime.api_url,
        &credentials.username,
        &credentials.password,
    )
    .await
    .context("Login failed")?;

    let start = Instant::now();
    println!(
        "Please wait, retrieving data {}",
        format_commands(&credentials.commands)
    );

    let catalog = devices::fetch_all_devices(&client, &runtime.api_url, &token)
        .await
        .context("Error fetching devices")?;
    let selected = devices::select_devices(&catalog, credentials.devices.as_deref());
    println!("{}", selection_line(credentials.devices.is_some(), selected.len()));

    let mut report = RunReport {
        catalog: catalog.len(),
        selected: selected.len(),
        summary: DispatchSummary::default(),
    };

    match mode {
        RunMode::List => devices::print_devices_table(&selected),
        RunMode::Dispatch => {
            let executor = Arc::new(CliExecutor::new(
                client,
                &runtime.api_url,
                token,
                credentials.commands.clone(),
            ));
            report.summary = dispatch::dispatch(selected, executor).await;
        }
    }

    println!(
        "Data retrieval completed in {}",
        format_elapsed(start.elapsed())
    );
    Ok(report)
}

/// `[cmd1 cmd2]`, the way the command list is echoed before the fetch.
fn format_commands(commands: &[String]) -> String {
    format!("[{}]", commands.join(" "))
}

fn selection_line(by_ip: bool, count: usize) -> String {
    if by_ip {
        format!("Total Devices matching configured IPs: {}", count)
    } else {
        format!("Total Devices with DeviceFunction 'AP': {}", count)
    }
}
