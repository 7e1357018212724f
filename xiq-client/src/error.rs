use thiserror::Error;

/// Login failed. Fatal: the run stops before any device is touched.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("request failed with status code: {0}")]
    Status(u16),
    #[error("error sending request: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("error decoding login response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Catalog retrieval failed. Fatal, pages fetched so far are discarded.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("page {page}: request failed with status code: {status}")]
    Status { page: u32, status: u16 },
    #[error("page {page}: error sending request: {source}")]
    Transport {
        page: u32,
        #[source]
        source: reqwest::Error,
    },
    #[error("page {page}: error decoding device page: {source}")]
    Decode {
        page: u32,
        #[source]
        source: reqwest::Error,
    },
}

/// Command execution on a single device failed. Never aborts the run.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("error marshaling commands: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("error sending request: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("request failed with status code: {0}")]
    Status(u16),
    #[error("error decoding command output: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("no command output for device {0}")]
    MissingDevice(i64),
}
