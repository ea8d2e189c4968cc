use crate::parsers::{AssetReference, ParseResult};
use regex::Regex;
use std::sync::LazyLock;

// Attribute values are matched with either quote style. Values containing the
// other quote character are fine; values containing their own quote are cut short.
static SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"src=(?:"([^"]*)"|'([^']*)')"#).expect("src pattern should be valid")
});

static SRCSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"srcset=(?:"([^"]*)"|'([^']*)')"#).expect("srcset pattern should be valid")
});

static LINK_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<link\b[^>]*?href=(?:"([^"]*)"|'([^']*)')"#)
        .expect("link href pattern should be valid")
});

static ANCHOR_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\b[^>]*?href=(?:"([^"]*)"|'([^']*)')"#)
        .expect("anchor href pattern should be valid")
});

/// Scans raw page text for asset references
///
/// Collects every `src`, every `srcset` (kept whole, candidates are not split)
/// and every `href` sitting on a `<link>` tag. The result is in document order
/// and keeps duplicates; it is not filtered for locality. Empty attribute
/// values are skipped. Markup that doesn't match simply yields nothing.
pub fn parse(html: &str) -> ParseResult {
    let mut references = Vec::new();
    collect(&SRC, html, &mut references);
    collect(&SRCSET, html, &mut references);
    collect(&LINK_HREF, html, &mut references);

    // Stable, so equal offsets can't reorder
    references.sort_by_key(|r| r.offset);

    ::log::debug!("HTML scan found {} asset references", references.len());

    ParseResult::new(references)
}

/// Returns the raw reference strings found by [`parse`]
pub fn extract_asset_references(html: &str) -> Vec<String> {
    parse(html)
        .references
        .into_iter()
        .map(|r| r.value)
        .collect()
}

/// Returns every `href` value found on an `<a>` tag, empty values included
pub fn extract_anchor_hrefs(html: &str) -> Vec<String> {
    ANCHOR_HREF
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Counts `<img` tag openings
pub fn count_image_tags(html: &str) -> usize {
    html.matches("<img").count()
}

fn collect(pattern: &Regex, html: &str, references: &mut Vec<AssetReference>) {
    for caps in pattern.captures_iter(html) {
        let Some(value) = caps.get(1).or_else(|| caps.get(2)) else {
            continue;
        };
        if value.as_str().is_empty() {
            continue;
        }
        references.push(AssetReference {
            value: value.as_str().to_string(),
            offset: value.start(),
        });
    }
}
