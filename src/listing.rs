//! The fetch, join and print flow the binary runs.

use crate::source::WishlistSource;
use crate::types::{Item, ItemCategory};
use crate::Result;
use std::io::Write;

/// What [`print_wishlist`] wrote, and where a caller could continue from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSummary {
    /// URLs printed from the wishlist page itself
    pub current_page_count: usize,
    /// URLs printed from the follow-up API batch
    pub next_page_count: usize,
    pub more_available: bool,
    /// Cursor returned by the follow-up call
    pub next_token: String,
}

/// Write one item URL per line.
pub fn write_item_urls<'i, W, I>(out: &mut W, items: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'i Item>,
{
    let mut written = 0;
    for item in items {
        writeln!(out, "{}", item.item_url)?;
        written += 1;
    }
    Ok(written)
}

/// Print the wishlist page's items, then the next batch from the API.
///
/// The page's URLs are written (and flushed) before the follow-up request is made,
/// so a failure there leaves them in `out`. Exactly one follow-up request is made.
pub async fn print_wishlist<S, W>(source: &S, out: &mut W) -> Result<ListingSummary>
where
    S: WishlistSource + ?Sized,
    W: Write,
{
    let blob = source.fetch_page_blob().await?;

    let current_page_count =
        write_item_urls(out, blob.current_page_items(ItemCategory::Wishlist))?;
    out.flush()?;
    log::info!(
        "Printed {} of {} wishlist ids from the page",
        current_page_count,
        blob.wishlist_data.sequence.len()
    );

    let next_page = source
        .fetch_wishlist_items(blob.fan_data.fan_id, &blob.wishlist_data.last_token)
        .await?;

    let next_page_count = write_item_urls(out, &next_page.items)?;
    out.flush()?;
    log::info!(
        "Printed {} wishlist items from the API (more_available: {})",
        next_page_count,
        next_page.more_available
    );

    Ok(ListingSummary {
        current_page_count,
        next_page_count,
        more_available: next_page.more_available,
        next_token: next_page.last_token,
    })
}
