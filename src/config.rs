use crate::error::{ArchiveError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Browser identification sent with every request; some sites reject obvious bots
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_7_3) AppleWebKit/537.36 (KHTML, like Gecko, Mediapartners-Google) Chrome/117.0.5938.132 Safari/537.3";

/// Configuration for the page archiver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiverConfig {
    /// Directory under which one archive directory per page is created
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// User agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds (`null` waits forever)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: Option<u64>,

    /// Whether to write `metadata.txt` next to the archived page
    #[serde(default)]
    pub include_metadata: bool,
}

impl ArchiverConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| ArchiveError::io(path, e))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ArchiveError::io(path, e))?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ArchiveError::Config(e.to_string()))
    }
}

impl Default for ArchiverConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            user_agent: default_user_agent(),
            request_timeout_secs: default_request_timeout_secs(),
            include_metadata: false,
        }
    }
}

/// Default value for output_dir
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Default value for user_agent
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

/// Default value for request_timeout_secs
fn default_request_timeout_secs() -> Option<u64> {
    Some(30)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = ArchiverConfig::from_json("{}").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.request_timeout_secs, Some(30));
        assert!(!config.include_metadata);
    }

    #[test]
    fn test_explicit_values() {
        let config = ArchiverConfig::from_json(
            r#"{
                "output_dir": "/tmp/archives",
                "user_agent": "test-agent",
                "request_timeout_secs": null,
                "include_metadata": true
            }"#,
        )
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/archives"));
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.request_timeout_secs, None);
        assert!(config.include_metadata);
    }

    #[test]
    fn test_invalid_json_is_a_config_error() {
        let err = ArchiverConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ArchiveError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"include_metadata": true}}"#).unwrap();

        let config = ArchiverConfig::from_file(file.path()).unwrap();
        assert!(config.include_metadata);

        let missing = ArchiverConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(missing, ArchiveError::Io { .. }));
    }
}
