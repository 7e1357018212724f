use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// Device function label the API uses for access points.
pub const ACCESS_POINT_FUNCTION: &str = "AP";

/// Device type filter for physical (non-simulated) devices.
pub const REAL_DEVICE_TYPE: &str = "REAL";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hostname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub device_function: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ip_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub software_version: String,
}

impl DeviceRecord {
    pub fn is_access_point(&self) -> bool {
        self.device_function == ACCESS_POINT_FUNCTION
    }
}

impl Display for DeviceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.hostname, self.id, self.ip_address)
    }
}
