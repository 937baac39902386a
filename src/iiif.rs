//! Info-document URL derivation.
//!
//! The host element carries a base resource locator. The external viewer
//! recognizes a tile source as IIIF only when the URL points at the image's
//! info document, so the locator is normalized by appending `/info.json`
//! unless it already ends with it. Nothing else is parsed or validated;
//! malformed locators pass through to the viewer untouched.

/// Conventional suffix of the IIIF Image API info document.
pub const INFO_DOCUMENT_SUFFIX: &str = "/info.json";

/// Derive the info-document URL from a raw locator.
///
/// Returns the locator unchanged when it already ends with
/// [`INFO_DOCUMENT_SUFFIX`], otherwise appends the suffix.
///
/// # Example
///
/// ```
/// use deepzoom_hook::iiif::info_document_url;
///
/// assert_eq!(
///     info_document_url("https://example.org/iiif/img1"),
///     "https://example.org/iiif/img1/info.json"
/// );
/// ```
pub fn info_document_url(raw: &str) -> String {
    if raw.ends_with(INFO_DOCUMENT_SUFFIX) {
        raw.to_string()
    } else {
        format!("{}{}", raw, INFO_DOCUMENT_SUFFIX)
    }
}
