use std::collections::HashSet;

use reqwest::Client;
use tracing::debug;

use crate::auth::AuthToken;
use crate::error::FetchError;
use crate::server::{self, DeviceRecord};

mod table;

pub use table::{format_devices_table, print_devices_table};

/// Fetch the whole device inventory, one page at a time starting at page 1.
///
/// Any failing page aborts the fetch and drops what was collected so far.
pub async fn fetch_all_devices(
    client: &Client,
    api_url: &str,
    token: &AuthToken,
) -> Result<Vec<DeviceRecord>, FetchError> {
    let mut devices = Vec::new();
    let mut page = 1;

    loop {
        let body = server::list_devices_page(client, api_url, token.as_str(), page).await?;
        let last = body.is_last(page);
        devices.extend(body.data);
        if last {
            break;
        }
        page += 1;
    }

    debug!(pages = page, devices = devices.len(), "Device catalog fetched");
    Ok(devices)
}

/// Narrow the catalog to the devices commands are sent to.
///
/// With `target_ips` every device whose IP is listed is kept, otherwise only
/// access points. Catalog order is preserved and a device ID is never
/// returned twice.
pub fn select_devices(
    catalog: &[DeviceRecord],
    target_ips: Option<&[String]>,
) -> Vec<DeviceRecord> {
    let mut seen = HashSet::new();

    catalog
        .iter()
        .filter(|device| match target_ips {
            Some(ips) => ips.iter().any(|ip| *ip == device.ip_address),
            None => device.is_access_point(),
        })
        .filter(|device| seen.insert(device.id))
        .cloned()
        .collect()
}
