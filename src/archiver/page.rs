use crate::archiver::progress::{ArchiveProgress, NoProgress};
use crate::error::{ArchiveError, Result};
use crate::fetcher::Fetcher;
use crate::filter;
use crate::parsers::{Parser, html};
use crate::results::{ArchiveSummary, ArchivedAsset, Metadata, PageArchive};
use crate::store::{self, ArchiveDirectory, ArchiveStore};
use crate::utils;
use chrono::Local;

/// Archives single pages and the same-origin assets they reference
///
/// Everything happens sequentially: one page at a time, one asset at a time,
/// in the order references appear in the page.
pub struct PageArchiver {
    fetcher: Fetcher,
    store: ArchiveStore,
    include_metadata: bool,
    progress: Box<dyn ArchiveProgress>,
}

impl PageArchiver {
    /// Create an archiver that writes into `store`
    pub fn new(fetcher: Fetcher, store: ArchiveStore) -> Self {
        Self {
            fetcher,
            store,
            include_metadata: false,
            progress: Box::new(NoProgress),
        }
    }

    /// Write `metadata.txt` for each archived page
    pub fn with_metadata(mut self, include_metadata: bool) -> Self {
        self.include_metadata = include_metadata;
        self
    }

    /// Report asset progress to `progress`
    pub fn with_progress(self, progress: impl ArchiveProgress + 'static) -> Self {
        self.with_boxed_progress(Box::new(progress))
    }

    /// Report asset progress to an already boxed sink
    pub fn with_boxed_progress(mut self, progress: Box<dyn ArchiveProgress>) -> Self {
        self.progress = progress;
        self
    }

    /// Archives every URL in turn and returns how many succeeded
    ///
    /// A failing URL never stops the run.
    pub async fn archive_all<S: AsRef<str>>(&self, urls: &[S]) -> ArchiveSummary {
        let mut summary = ArchiveSummary {
            requested: urls.len(),
            archived: 0,
        };

        for url in urls {
            if self.archive(url.as_ref()).await {
                summary.archived += 1;
            }
        }

        if summary.all_archived() {
            ::log::info!("Archived pages: {}", summary);
        } else {
            ::log::warn!("Archived pages: {}", summary);
        }

        summary
    }

    /// Archives one page, logging the outcome
    ///
    /// Returns false if the URL is invalid or anything from the page fetch
    /// onward fails. A partially written directory is left in place on failure.
    pub async fn archive(&self, url: &str) -> bool {
        match self.archive_page(url).await {
            Ok(archive) => {
                ::log::info!(
                    "{} is archived successfully! ({} assets in {})",
                    url,
                    archive.assets.len(),
                    archive.directory.display()
                );
                true
            }
            Err(ArchiveError::InvalidUrl(_)) => {
                ::log::error!("{} is not a valid URL.", url);
                false
            }
            Err(e) => {
                ::log::error!("An error occurred while archiving {}: {}", url, e);
                false
            }
        }
    }

    /// Archives one page and returns what was written
    pub async fn archive_page(&self, url: &str) -> Result<PageArchive> {
        if !filter::is_absolute_url(url) {
            return Err(ArchiveError::InvalidUrl(url.to_string()));
        }
        let origin = utils::page_origin(url)?;

        ::log::info!("{} is being archived", url);

        let page = self.fetcher.get_text(url).await?;
        let (mut text, scan) = Parser::parse_page(&page);
        let directory = self.store.prepare_directory(url).await?;

        let references = scan.local_references();
        ::log::info!("Found {} local assets in {}", references.len(), url);

        self.progress.start(url, references.len());
        let outcome = self
            .archive_assets(&origin, &directory, &references, &mut text)
            .await;
        self.progress.finish();
        let (assets, skipped) = outcome?;

        let page_path = directory.write_page(&text).await?;

        let metadata = if self.include_metadata {
            let metadata = build_metadata(url, assets.len(), &text);
            ::log::info!("{}", metadata);
            directory.write_metadata(&metadata.to_string()).await?;
            Some(metadata)
        } else {
            None
        };

        Ok(PageArchive {
            url: url.to_string(),
            directory: directory.path().to_path_buf(),
            page_path,
            assets,
            skipped,
            metadata,
        })
    }

    /// Fetches, stores and rewrites each reference in order
    ///
    /// Duplicate references are fetched and written once per occurrence.
    async fn archive_assets(
        &self,
        origin: &str,
        directory: &ArchiveDirectory,
        references: &[String],
        text: &mut String,
    ) -> Result<(Vec<ArchivedAsset>, Vec<String>)> {
        let mut assets = Vec::with_capacity(references.len());
        let mut skipped = Vec::new();

        for reference in references {
            if let Err(e) = store::asset_relative_path(reference) {
                ::log::warn!("Skipping asset: {}", e);
                skipped.push(reference.clone());
                self.progress.advance(reference);
                continue;
            }

            let asset_url = format!("{origin}{reference}");
            ::log::debug!("Archiving {}", asset_url);

            let body = self.fetcher.get_bytes(&asset_url).await?;
            let path = directory.write_asset(reference, &body).await?;

            *text = rewrite_reference(text, reference);

            assets.push(ArchivedAsset {
                reference: reference.clone(),
                url: asset_url,
                size: body.len(),
                path,
            });
            self.progress.advance(reference);
        }

        Ok((assets, skipped))
    }
}

/// Replaces every occurrence of a root-relative reference with the same path minus its leading `/`
///
/// This is a plain substring replacement over the whole text, so a reference
/// that is a substring of a longer one rewrites the longer one too.
pub fn rewrite_reference(text: &str, reference: &str) -> String {
    match reference.strip_prefix('/') {
        Some(relative) => text.replace(reference, relative),
        None => text.to_string(),
    }
}

/// Computes metadata counts from the final page text
pub fn build_metadata(url: &str, local_assets: usize, text: &str) -> Metadata {
    let links = html::extract_anchor_hrefs(text)
        .iter()
        .filter(|href| filter::is_meaningful_link(href))
        .count();

    Metadata {
        url: url.to_string(),
        local_assets,
        images: html::count_image_tags(text),
        links,
        archived_at: Local::now(),
    }
}
