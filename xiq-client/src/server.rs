use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use tracing::debug;

pub use xiq_shared::auth::{LoginRequest, LoginResponse};
pub use xiq_shared::cli::{CommandOutcome, DeviceCliOutputs};
pub use xiq_shared::device::DeviceRecord;
pub use xiq_shared::pagination::{DeviceListQuery, DevicePage};

use crate::error::{AuthError, DispatchError, FetchError};

/// Shared HTTP client. Every request asks for JSON.
pub fn get_client() -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Client::builder().default_headers(headers).build()
}

pub async fn login(
    client: &Client,
    api_url: &str,
    body: &LoginRequest,
) -> Result<LoginResponse, AuthError> {
    let res = client
        .post(format!("{}/login", api_url))
        .json(body)
        .send()
        .await
        .map_err(AuthError::Transport)?;

    if res.status() != StatusCode::OK {
        return Err(AuthError::Status(res.status().as_u16()));
    }
    res.json().await.map_err(AuthError::Decode)
}

pub async fn list_devices_page(
    client: &Client,
    api_url: &str,
    token: &str,
    page: u32,
) -> Result<DevicePage, FetchError> {
    let res = client
        .get(format!("{}/devices", api_url))
        .query(&DeviceListQuery::page(page))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|source| FetchError::Transport { page, source })?;

    if res.status() != StatusCode::OK {
        return Err(FetchError::Status {
            page,
            status: res.status().as_u16(),
        });
    }
    let body: DevicePage = res
        .json()
        .await
        .map_err(|source| FetchError::Decode { page, source })?;
    debug!(
        page,
        total_pages = body.total_pages,
        records = body.data.len(),
        "Fetched device page"
    );
    Ok(body)
}

pub async fn send_cli_commands(
    client: &Client,
    api_url: &str,
    token: &str,
    device_id: i64,
    commands: &[String],
) -> Result<DeviceCliOutputs, DispatchError> {
    let body = serde_json::to_vec(commands).map_err(DispatchError::Encode)?;
    let res = client
        .post(format!("{}/devices/{}/:cli", api_url, device_id))
        .header(CONTENT_TYPE, "application/json")
        .bearer_auth(token)
        .body(body)
        .send()
        .await
        .map_err(DispatchError::Transport)?;

    if !res.status().is_success() {
        return Err(DispatchError::Status(res.status().as_u16()));
    }
    res.json().await.map_err(DispatchError::Decode)
}
