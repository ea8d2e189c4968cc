use crate::error::{ArchiveError, Result};
use url::Url;

/// Convert a page URL to a filesystem-safe directory name
///
/// The `http://`/`https://` prefix is dropped and every remaining byte other
/// than ASCII alphanumerics and `-_.~` is percent-encoded, so the name holds
/// no path separators.
pub fn safe_directory_name(url: &str) -> String {
    let name = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    urlencoding::encode(name).into_owned()
}

/// Derive `scheme://host[:port]` from a page URL
///
/// Root-relative asset references are resolved by plain concatenation onto this.
pub fn page_origin(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|_| ArchiveError::InvalidUrl(url.to_string()))?;
    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| ArchiveError::InvalidUrl(url.to_string()))?;

    Ok(match parsed.port() {
        Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
        None => format!("{}://{}", parsed.scheme(), host),
    })
}
