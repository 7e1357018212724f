use serde::{Deserialize, Serialize};

use crate::device::{DeviceRecord, REAL_DEVICE_TYPE};

/// Records requested per page of the device listing.
pub const DEVICE_PAGE_SIZE: u32 = 10;

/// Query string of `GET /devices`.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceListQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(rename = "deviceTypes")]
    pub device_types: &'static str,
    #[serde(rename = "async")]
    pub async_mode: bool,
}

impl DeviceListQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            limit: DEVICE_PAGE_SIZE,
            device_types: REAL_DEVICE_TYPE,
            async_mode: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DevicePage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub count: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub data: Vec<DeviceRecord>,
}

impl DevicePage {
    pub fn is_last(&self, page: u32) -> bool {
        page >= self.total_pages
    }
}
