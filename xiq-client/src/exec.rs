use async_trait::async_trait;
use reqwest::Client;

use crate::auth::AuthToken;
use crate::dispatch::CommandExecutor;
use crate::error::DispatchError;
use crate::server::{self, CommandOutcome, DeviceRecord};

/// Runs the configured command batch on one device through `/devices/{id}/:cli`.
pub struct CliExecutor {
    client: Client,
    api_url: String,
    token: AuthToken,
    commands: Vec<String>,
}

impl CliExecutor {
    pub fn new(client: Client, api_url: &str, token: AuthToken, commands: Vec<String>) -> Self {
        Self {
            client,
            api_url: api_url.to_string(),
            token,
            commands,
        }
    }
}

#[async_trait]
impl CommandExecutor for CliExecutor {
    async fn execute(&self, device: &DeviceRecord) -> Result<Vec<CommandOutcome>, DispatchError> {
        let mut res = server::send_cli_commands(
            &self.client,
            &self.api_url,
            self.token.as_str(),
            device.id,
            &self.commands,
        )
        .await?;

        res.device_cli_outputs
            .remove(&device.id)
            .ok_or(DispatchError::MissingDevice(device.id))
    }
}

/// Outcomes whose response code is exactly the success marker, in order.
pub fn successful_outcomes(outcomes: &[CommandOutcome]) -> impl Iterator<Item = &CommandOutcome> {
    outcomes.iter().filter(|outcome| outcome.succeeded())
}

pub fn format_device_output(device: &DeviceRecord, output: &str) -> String {
    format!(
        "Device ID: {}, Hostname: {}, Output: {}",
        device.id, device.hostname, output
    )
}

/// Print one line per successful outcome and return how many were printed.
pub fn print_successful_outputs(device: &DeviceRecord, outcomes: &[CommandOutcome]) -> usize {
    let mut printed = 0;
    for outcome in successful_outcomes(outcomes) {
        println!("{}", format_device_output(device, &outcome.output));
        printed += 1;
    }
    printed
}
