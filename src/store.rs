use crate::error::{ArchiveError, Result};
use crate::utils;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the metadata file written next to an archived page
pub const METADATA_FILE_NAME: &str = "metadata.txt";

/// Owns the on-disk layout of archives under a root directory
#[derive(Debug, Clone)]
pub struct ArchiveStore {
    root: PathBuf,
}

impl ArchiveStore {
    /// Create a store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a fresh, empty archive directory for a page
    ///
    /// Destructive: an existing directory with the same name is removed
    /// recursively first, so an archive never merges with a stale one.
    pub async fn prepare_directory(&self, page_url: &str) -> Result<ArchiveDirectory> {
        let name = utils::safe_directory_name(page_url);
        let path = self.root.join(&name);

        if fs::try_exists(&path)
            .await
            .map_err(|e| ArchiveError::io(&path, e))?
        {
            ::log::debug!("Removing previous archive at {}", path.display());
            fs::remove_dir_all(&path)
                .await
                .map_err(|e| ArchiveError::io(&path, e))?;
        }

        fs::create_dir_all(&path)
            .await
            .map_err(|e| ArchiveError::io(&path, e))?;

        Ok(ArchiveDirectory { name, path })
    }
}

/// A freshly prepared directory holding one archived page
#[derive(Debug, Clone)]
pub struct ArchiveDirectory {
    name: String,
    path: PathBuf,
}

impl ArchiveDirectory {
    /// Filesystem-safe name shared by the directory and the page file
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute or root-relative path of the directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the rewritten page inside the directory
    pub fn page_path(&self) -> PathBuf {
        self.path.join(format!("{}.html", self.name))
    }

    /// Write an asset at the path implied by its reference
    ///
    /// Intermediate directories are created as needed. Returns the path written.
    pub async fn write_asset(&self, reference: &str, bytes: &[u8]) -> Result<PathBuf> {
        let relative = asset_relative_path(reference)?;
        let target = self.path.join(relative);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ArchiveError::io(parent, e))?;
        }
        fs::write(&target, bytes)
            .await
            .map_err(|e| ArchiveError::io(&target, e))?;

        Ok(target)
    }

    /// Write the rewritten page text
    pub async fn write_page(&self, text: &str) -> Result<PathBuf> {
        let target = self.page_path();
        fs::write(&target, text)
            .await
            .map_err(|e| ArchiveError::io(&target, e))?;
        Ok(target)
    }

    /// Write `metadata.txt`
    pub async fn write_metadata(&self, text: &str) -> Result<PathBuf> {
        let target = self.path.join(METADATA_FILE_NAME);
        fs::write(&target, text)
            .await
            .map_err(|e| ArchiveError::io(&target, e))?;
        Ok(target)
    }
}

/// Map a local asset reference to a path relative to the archive directory
///
/// The leading `/` is dropped and the query suffix is stripped from the final
/// segment only. Empty intermediate segments are ignored. References that would
/// leave the directory (`.` or `..` segments) or that name no file are rejected.
pub fn asset_relative_path(reference: &str) -> Result<PathBuf> {
    let unsafe_path = || ArchiveError::UnsafeAssetPath(reference.to_string());

    let rest = reference.strip_prefix('/').ok_or_else(unsafe_path)?;
    let mut segments: Vec<&str> = rest.split('/').collect();

    let last = segments.pop().unwrap_or_default();
    let file_name = last.split('?').next().unwrap_or_default();
    if is_special_segment(file_name) {
        return Err(unsafe_path());
    }

    let mut path = PathBuf::new();
    for segment in segments {
        if segment.is_empty() {
            continue;
        }
        if is_special_segment(segment) {
            return Err(unsafe_path());
        }
        path.push(segment);
    }
    path.push(file_name);

    Ok(path)
}

fn is_special_segment(segment: &str) -> bool {
    matches!(segment, "" | "." | "..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_relative_path() {
        assert_eq!(
            asset_relative_path("/a/b.png").unwrap(),
            PathBuf::from("a").join("b.png")
        );
        assert_eq!(
            asset_relative_path("/x/y.png?v=2").unwrap(),
            PathBuf::from("x").join("y.png")
        );
        assert_eq!(
            asset_relative_path("/favicon.ico").unwrap(),
            PathBuf::from("favicon.ico")
        );
        assert_eq!(
            asset_relative_path("/css//site.css").unwrap(),
            PathBuf::from("css").join("site.css")
        );
    }

    #[test]
    fn test_query_is_only_stripped_from_final_segment() {
        assert_eq!(
            asset_relative_path("/api?path=/img.png").unwrap(),
            PathBuf::from("api?path=").join("img.png")
        );
    }

    #[test]
    fn test_unsafe_references_are_rejected() {
        for reference in [
            "/../etc/passwd",
            "/a/../../b.png",
            "/a/./b.png",
            "/a/..",
            "/",
            "/dir/",
            "/dir/?v=1",
            "relative.png",
        ] {
            let err = asset_relative_path(reference).unwrap_err();
            assert!(
                matches!(err, ArchiveError::UnsafeAssetPath(_)),
                "{reference} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_prepare_directory_replaces_previous_archive() {
        let root = tempfile::tempdir().unwrap();
        let store = ArchiveStore::new(root.path());

        let dir = store.prepare_directory("https://example.com/page").await.unwrap();
        assert_eq!(dir.name(), "example.com%2Fpage");
        dir.write_asset("/old/stale.png", b"stale").await.unwrap();

        let dir = store.prepare_directory("https://example.com/page").await.unwrap();
        assert!(dir.path().is_dir());
        assert!(!dir.path().join("old").exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_writes_land_inside_directory() {
        let root = tempfile::tempdir().unwrap();
        let store = ArchiveStore::new(root.path());
        let dir = store.prepare_directory("http://example.com").await.unwrap();

        let asset = dir.write_asset("/static/js/app.js?v=3", b"console.log(1)").await.unwrap();
        assert_eq!(asset, dir.path().join("static").join("js").join("app.js"));
        assert_eq!(std::fs::read(&asset).unwrap(), b"console.log(1)");

        let page = dir.write_page("<html></html>").await.unwrap();
        assert_eq!(page, dir.path().join("example.com.html"));
        assert_eq!(std::fs::read_to_string(&page).unwrap(), "<html></html>");

        let metadata = dir.write_metadata("METADATA").await.unwrap();
        assert_eq!(metadata, dir.path().join(METADATA_FILE_NAME));
    }
}
