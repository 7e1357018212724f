use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// Response code the API reports for a command that ran successfully.
pub const SUCCESS_RESPONSE_CODE: &str = "SUCCEED";

/// Result of one CLI command on one device.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cli: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub response_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub output: String,
}

impl CommandOutcome {
    pub fn succeeded(&self) -> bool {
        self.response_code == SUCCESS_RESPONSE_CODE
    }
}

/// Response of `POST /devices/{id}/:cli`, keyed by device ID.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct DeviceCliOutputs {
    #[serde(default)]
    pub device_cli_outputs: HashMap<i64, Vec<CommandOutcome>>,
}
