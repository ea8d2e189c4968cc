/// Receives progress notifications while a page's assets are archived
///
/// Implementations must tolerate `finish` being called after a failure
/// part way through a page.
pub trait ArchiveProgress: Send + Sync {
    /// Called once per page before the first asset is fetched
    fn start(&self, url: &str, total: usize);

    /// Called after each local reference is handled, archived or skipped
    fn advance(&self, reference: &str);

    /// Called once per page after the asset loop ends
    fn finish(&self);
}

/// Progress sink that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ArchiveProgress for NoProgress {
    fn start(&self, _url: &str, _total: usize) {}

    fn advance(&self, _reference: &str) {}

    fn finish(&self) {}
}
