pub mod html;
pub mod text;


use crate::filter;

/// A raw reference string as it appears in the page text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReference {
    /// The attribute value, untouched
    pub value: String,
    /// Byte offset of the value in the scanned text
    pub offset: usize,
}

impl AssetReference {
    /// Returns true if this reference is eligible for local archiving
    pub fn is_local(&self) -> bool {
        filter::is_local_asset_reference(&self.value)
    }
}

/// Result of scanning a page for asset references
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// References in document order, duplicates kept
    pub references: Vec<AssetReference>,
}

impl ParseResult {
    /// Creates a new parse result with the given references
    pub fn new(references: Vec<AssetReference>) -> Self {
        Self { references }
    }

    /// Returns the local references, in document order, duplicates kept
    pub fn local_references(&self) -> Vec<String> {
        self.references
            .iter()
            .filter(|r| r.is_local())
            .map(|r| r.value.clone())
            .collect()
    }
}

/// Entry point used by the archiver: normalizes the page text and scans it
pub struct Parser;

impl Parser {
    /// Normalizes whitespace, then extracts asset references from the result
    ///
    /// Returns the normalized text alongside the scan so that later rewrites
    /// operate on exactly the text the offsets refer to.
    pub fn parse_page(raw: &str) -> (String, ParseResult) {
        let normalized = text::normalize_whitespace(raw);
        let result = html::parse(&normalized);
        (normalized, result)
    }
}
