use crate::types::{PageBlob, PaginatedItemsResponse};
use crate::{Result, WishlistClient};
use async_trait::async_trait;

/// The two network operations the listing flow depends on.
///
/// [`WishlistClient`] is the real implementation. When the `mock` feature is enabled
/// this crate also provides `MockWishlistSource`, generated with `mockall`.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait WishlistSource {
    /// Fetch the wishlist page and decode its embedded blob.
    async fn fetch_page_blob(&self) -> Result<PageBlob>;

    /// Fetch one batch of wishlist items older than `older_than_token`.
    async fn fetch_wishlist_items(
        &self,
        fan_id: u64,
        older_than_token: &str,
    ) -> Result<PaginatedItemsResponse>;
}

#[async_trait(?Send)]
impl WishlistSource for WishlistClient {
    async fn fetch_page_blob(&self) -> Result<PageBlob> {
        WishlistClient::fetch_page_blob(self).await
    }

    async fn fetch_wishlist_items(
        &self,
        fan_id: u64,
        older_than_token: &str,
    ) -> Result<PaginatedItemsResponse> {
        WishlistClient::fetch_wishlist_items(self, fan_id, older_than_token).await
    }
}
