use crate::source::WishlistSource;
use crate::types::Item;
use crate::Result;

use async_trait::async_trait;
use std::collections::VecDeque;

/// Async iterator trait for cursor-paginated wishlist data.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait AsyncPaginatedIterator<T> {
    /// Fetch the next item from the iterator.
    ///
    /// New batches are requested as needed. Returns `Ok(None)` once the source
    /// reports no more items.
    async fn next(&mut self) -> Result<Option<T>>;

    /// Collect all remaining items into a Vec.
    ///
    /// **Warning**: this requests every remaining batch. Use [`take`](Self::take)
    /// for bounded collection.
    async fn collect_all(&mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Take up to n items from the iterator.
    async fn take(&mut self, n: usize) -> Result<Vec<T>> {
        let mut items = Vec::new();
        for _ in 0..n {
            match self.next().await? {
                Some(item) => items.push(item),
                None => break,
            }
        }
        Ok(items)
    }

    /// Number of batches fetched so far.
    fn current_page(&self) -> u32;
}

/// Walks the wishlist items API by following `last_token`.
///
/// Starts after the items already rendered on the wishlist page (the blob's
/// `wishlist_data.last_token`) and stops when a batch reports
/// `more_available: false` or comes back empty.
///
/// # Examples
///
/// ```rust,no_run
/// use bandcamp_wishlist::{AsyncPaginatedIterator, WishlistClient, WishlistItemsIterator};
///
/// # tokio_test::block_on(async {
/// let client = WishlistClient::new(Box::new(http_client::native::NativeClient::new()));
/// let blob = client.fetch_page_blob().await?;
///
/// let mut items = WishlistItemsIterator::new(
///     &client,
///     blob.fan_data.fan_id,
///     blob.wishlist_data.last_token.clone(),
/// );
/// while let Some(item) = items.next().await? {
///     println!("{}", item.item_url);
/// }
/// # Ok::<(), bandcamp_wishlist::WishlistError>(())
/// # });
/// ```
pub struct WishlistItemsIterator<'a, S: WishlistSource> {
    source: &'a S,
    fan_id: u64,
    token: String,
    buffer: VecDeque<Item>,
    pages_fetched: u32,
    finished: bool,
}

impl<'a, S: WishlistSource> WishlistItemsIterator<'a, S> {
    pub fn new(source: &'a S, fan_id: u64, starting_token: String) -> Self {
        Self {
            source,
            fan_id,
            token: starting_token,
            buffer: VecDeque::new(),
            pages_fetched: 0,
            finished: false,
        }
    }

    /// Cursor the next request will resume after.
    pub fn token(&self) -> &str {
        &self.token
    }
}

#[async_trait(?Send)]
impl<'a, S: WishlistSource> AsyncPaginatedIterator<Item> for WishlistItemsIterator<'a, S> {
    async fn next(&mut self) -> Result<Option<Item>> {
        if self.buffer.is_empty() && !self.finished {
            let response = self
                .source
                .fetch_wishlist_items(self.fan_id, &self.token)
                .await?;
            self.pages_fetched += 1;

            log::debug!(
                "Wishlist batch {}: {} items, more_available: {}",
                self.pages_fetched,
                response.items.len(),
                response.more_available
            );

            if !response.more_available || response.items.is_empty() {
                self.finished = true;
            }
            self.token = response.last_token;
            self.buffer.extend(response.items);
        }

        Ok(self.buffer.pop_front())
    }

    fn current_page(&self) -> u32 {
        self.pages_fetched
    }
}
