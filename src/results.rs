use chrono::{DateTime, Local};
use std::fmt;
use std::path::PathBuf;

/// Format used for the capture timestamp in `metadata.txt`
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// One local asset that was fetched and written to disk
#[derive(Debug, Clone)]
pub struct ArchivedAsset {
    /// Reference string as it appeared in the page
    pub reference: String,

    /// Absolute URL the bytes were fetched from
    pub url: String,

    /// Number of bytes written
    pub size: usize,

    /// File the bytes were written to
    pub path: PathBuf,
}

/// Outcome of a successful page archive
#[derive(Debug, Clone)]
pub struct PageArchive {
    /// URL of the page
    pub url: String,

    /// Archive directory for the page
    pub directory: PathBuf,

    /// Rewritten page file
    pub page_path: PathBuf,

    /// Assets in the order they were archived, one entry per occurrence
    pub assets: Vec<ArchivedAsset>,

    /// Local references that were rejected as unsafe and left untouched
    pub skipped: Vec<String>,

    /// Metadata, when it was requested
    pub metadata: Option<Metadata>,
}

/// Informational counts captured alongside an archived page
#[derive(Debug, Clone)]
pub struct Metadata {
    /// URL of the page
    pub url: String,

    /// Local assets archived (duplicates counted per occurrence)
    pub local_assets: usize,

    /// `<img` occurrences in the final page text
    pub images: usize,

    /// Anchor hrefs that are not `#` or `javascript:void`
    pub links: usize,

    /// When the archive was captured
    pub archived_at: DateTime<Local>,
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "METADATA")?;
        writeln!(f, "{}", "=".repeat(79))?;
        writeln!(f, "Web page url: {}", self.url)?;
        writeln!(f, "Local assets: {}", self.local_assets)?;
        writeln!(f, "Number of images: {}", self.images)?;
        writeln!(f, "Number of links: {}", self.links)?;
        writeln!(
            f,
            "Archived date: {}",
            self.archived_at.format(TIMESTAMP_FORMAT)
        )
    }
}

/// Totals for a run over several page URLs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    /// Number of URLs supplied
    pub requested: usize,

    /// Number of URLs archived successfully
    pub archived: usize,
}

impl ArchiveSummary {
    /// Returns true if every requested page was archived
    pub fn all_archived(&self) -> bool {
        self.archived == self.requested
    }
}

impl fmt::Display for ArchiveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.archived, self.requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_metadata_rendering() {
        let metadata = Metadata {
            url: "https://example.com".to_string(),
            local_assets: 3,
            images: 2,
            links: 1,
            archived_at: Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap(),
        };

        let expected = format!(
            "METADATA\n{}\nWeb page url: https://example.com\nLocal assets: 3\nNumber of images: 2\nNumber of links: 1\nArchived date: 09/03/2024 07:05:01\n",
            "=".repeat(79)
        );
        assert_eq!(metadata.to_string(), expected);
    }

    #[test]
    fn test_summary() {
        let summary = ArchiveSummary {
            requested: 2,
            archived: 0,
        };
        assert_eq!(summary.to_string(), "0/2");
        assert!(!summary.all_archived());
        assert!(ArchiveSummary::default().all_archived());
    }
}
