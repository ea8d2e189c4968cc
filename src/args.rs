use clap::Parser;
use page_archive::config::ArchiverConfig;
use page_archive::Result;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-archive")]
#[command(about = "Archives web pages together with their same-origin assets")]
#[command(version)]
pub struct Args {
    /// Web page URLs to archive
    #[arg(value_name = "URL", required = true, num_args = 1..)]
    pub urls: Vec<String>,

    /// Write metadata.txt next to each archived page
    #[arg(short, long)]
    pub metadata: bool,

    /// Directory archives are created under (defaults to the current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, conflicts_with = "no_timeout")]
    pub timeout: Option<u64>,

    /// Wait for slow servers indefinitely
    #[arg(long)]
    pub no_timeout: bool,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Build the archiver configuration; flags override the config file
    pub fn to_config(&self) -> Result<ArchiverConfig> {
        let mut config = match &self.config {
            Some(path) => ArchiverConfig::from_file(path)?,
            None => ArchiverConfig::default(),
        };

        if self.metadata {
            config.include_metadata = true;
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if self.no_timeout {
            config.request_timeout_secs = None;
        } else if let Some(timeout) = self.timeout {
            config.request_timeout_secs = Some(timeout);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from([
            "page-archive",
            "-m",
            "-o",
            "/tmp/out",
            "--timeout",
            "5",
            "https://example.com",
            "https://example.org",
        ]);
        assert_eq!(args.urls, vec!["https://example.com", "https://example.org"]);

        let config = args.to_config().unwrap();
        assert!(config.include_metadata);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.request_timeout_secs, Some(5));
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["page-archive", "https://example.com"]);
        let config = args.to_config().unwrap();
        assert!(!config.include_metadata);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.request_timeout_secs, Some(30));
    }

    #[test]
    fn test_no_timeout() {
        let args = Args::parse_from(["page-archive", "--no-timeout", "https://example.com"]);
        assert_eq!(args.to_config().unwrap().request_timeout_secs, None);
    }

    #[test]
    fn test_urls_are_required() {
        assert!(Args::try_parse_from(["page-archive"]).is_err());
        assert!(Args::try_parse_from(["page-archive", "-m"]).is_err());
    }
}
