//! Extraction and decoding of the wishlist page blob and API responses.
//!
//! These are pure functions over strings and bytes; the client feeds them response
//! bodies.

use crate::types::{PageBlob, PaginatedItemsResponse};
use crate::{Result, WishlistError};
use regex::Regex;
use std::sync::LazyLock;

static PAGEDATA_BLOB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"id="pagedata".*?data-blob="(.*?)">"#).expect("pagedata pattern is valid")
});

/// Find the raw, still-escaped `data-blob` value of the `pagedata` element.
///
/// Returns [`WishlistError::BlobNotFound`] when the page has no such attribute.
pub fn extract_blob(html: &str) -> Result<&str> {
    let captures = PAGEDATA_BLOB
        .captures(html)
        .ok_or(WishlistError::BlobNotFound)?;
    let blob = captures
        .get(1)
        .ok_or(WishlistError::BlobNotFound)?
        .as_str();

    log::debug!("Found pagedata blob ({} bytes escaped)", blob.len());
    Ok(blob)
}

/// Undo the site's attribute escaping. Only `&quot;` is decoded.
pub fn unescape_blob(escaped: &str) -> String {
    escaped.replace("&quot;", "\"")
}

pub fn decode_page_blob(json: &str) -> Result<PageBlob> {
    let blob: PageBlob =
        serde_json::from_str(json).map_err(|e| WishlistError::MalformedBlob(e.to_string()))?;

    log::debug!(
        "Decoded page blob for fan {}: {} wishlist ids, {} cached wishlist items",
        blob.fan_data.fan_id,
        blob.wishlist_data.sequence.len(),
        blob.item_cache.wishlist.len()
    );
    Ok(blob)
}

/// Extract, unescape and decode the page blob from a wishlist page.
pub fn parse_wishlist_page(html: &str) -> Result<PageBlob> {
    let escaped = extract_blob(html)?;
    decode_page_blob(&unescape_blob(escaped))
}

pub fn parse_wishlist_items_response(body: &[u8]) -> Result<PaginatedItemsResponse> {
    let response: PaginatedItemsResponse = serde_json::from_slice(body)
        .map_err(|e| WishlistError::MalformedResponse(e.to_string()))?;

    log::debug!(
        "Decoded {} wishlist items (more_available: {})",
        response.items.len(),
        response.more_available
    );
    Ok(response)
}
