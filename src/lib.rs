// Re-export modules
pub mod archiver;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod filter;
pub mod parsers;
pub mod results;
pub mod store;
pub mod utils;

// Re-export commonly used types for convenience
pub use archiver::{ArchiveProgress, NoProgress, PageArchiver};
pub use error::{ArchiveError, Result};
pub use results::{ArchiveSummary, PageArchive};

use std::path::PathBuf;

/// Main builder for archiving a list of page URLs
pub struct Archiver {
    urls: Vec<String>,
    config: config::ArchiverConfig,
    progress: Option<Box<dyn ArchiveProgress>>,
}

impl Archiver {
    /// Create a new Archiver builder for the given page URLs
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            config: config::ArchiverConfig::default(),
            progress: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: config::ArchiverConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = config::ArchiverConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Write `metadata.txt` next to each archived page
    pub fn with_metadata(mut self, include_metadata: bool) -> Self {
        self.config.include_metadata = include_metadata;
        self
    }

    /// Set the directory archives are created under
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = output_dir.into();
        self
    }

    /// Set the per-request timeout (`None` waits forever)
    pub fn with_timeout(mut self, timeout_seconds: Option<u64>) -> Self {
        self.config.request_timeout_secs = timeout_seconds;
        self
    }

    /// Report asset progress to `progress`
    pub fn with_progress(mut self, progress: impl ArchiveProgress + 'static) -> Self {
        self.progress = Some(Box::new(progress));
        self
    }

    /// Archive every page in order and return the run totals
    ///
    /// Fails only if the HTTP client cannot be constructed; per-page failures
    /// are logged and counted in the summary.
    pub async fn run(self) -> Result<ArchiveSummary> {
        let fetcher = fetcher::Fetcher::new(&self.config)?;
        let store = store::ArchiveStore::new(&self.config.output_dir);

        let mut archiver =
            PageArchiver::new(fetcher, store).with_metadata(self.config.include_metadata);
        if let Some(progress) = self.progress {
            archiver = archiver.with_boxed_progress(progress);
        }

        Ok(archiver.archive_all(&self.urls).await)
    }
}
