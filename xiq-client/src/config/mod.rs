use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.extremecloudiq.com";
pub const DEFAULT_CONFIG_FILE: &str = "credentials.json";

/// Literal appended to the `file` path named in the credentials file.
pub const OUTPUT_FILE_MARKER: &str = "Output written to the file.";

/// Contents of the credentials file.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub commands: Vec<String>,
    /// Explicit target IPs. When present the access point filter is not applied.
    #[serde(default)]
    pub devices: Option<Vec<String>>,
}

impl Credentials {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("error reading credentials from {}", path.display()))?;
        let credentials: Credentials =
            serde_json::from_str(&contents).context("error decoding credentials from JSON")?;
        debug!(
            commands = credentials.commands.len(),
            explicit_devices = credentials.devices.is_some(),
            "Loaded credentials from {:?}",
            path
        );
        Ok(credentials)
    }
}

/// Append `OUTPUT_FILE_MARKER` to `path`, creating the file if needed.
pub fn write_output_marker(path: &Path) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("error opening {}", path.display()))?;
    file.write_all(OUTPUT_FILE_MARKER.as_bytes())
        .with_context(|| format!("error writing to {}", path.display()))?;
    Ok(())
}

/// Process-wide settings, fixed once the CLI has been parsed.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub api_url: String,
    pub version: String,
}

impl RuntimeConfig {
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            version: program_version(),
        }
    }
}

pub fn program_version() -> String {
    format!("{} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_COMMIT"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_json(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_credentials() {
        let file = write_json(
            r#"{
                "username": "admin@example.com",
                "password": "secret",
                "file": "out.txt",
                "commands": ["show version", "show interface eth0"],
                "devices": ["10.0.0.5", "10.0.0.9"]
            }"#,
        );

        let creds = Credentials::load(file.path()).unwrap();
        assert_eq!(creds.username, "admin@example.com");
        assert_eq!(creds.file, Some(PathBuf::from("out.txt")));
        assert_eq!(creds.commands, vec!["show version", "show interface eth0"]);
        assert_eq!(
            creds.devices,
            Some(vec!["10.0.0.5".to_string(), "10.0.0.9".to_string()])
        );
    }

    #[test]
    fn test_load_minimal_credentials() {
        let file = write_json(r#"{ "username": "u", "password": "p", "commands": ["show ver"] }"#);

        let creds = Credentials::load(file.path()).unwrap();
        assert!(creds.file.is_none());
        assert!(creds.devices.is_none());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Credentials::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(format!("{err:#}").contains("error reading credentials"));
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let file = write_json("{ not json");
        let err = Credentials::load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("error decoding credentials"));
    }

    #[test]
    fn test_output_marker_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_output_marker(&path).unwrap();
        write_output_marker(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, OUTPUT_FILE_MARKER.repeat(2));
    }

    #[test]
    fn test_runtime_config_trims_trailing_slash() {
        let config = RuntimeConfig::new("http://127.0.0.1:8080/");
        assert_eq!(config.api_url, "http://127.0.0.1:8080");
        assert!(config.version.starts_with(env!("CARGO_PKG_VERSION")));
    }
}
