use crate::config::ClientConfig;
use crate::parsing::{parse_wishlist_items_response, parse_wishlist_page};
use crate::types::{PageBlob, PaginatedItemsResponse, WishlistItemsRequest};
use crate::{Result, WishlistError};
use http_client::{HttpClient, Request, Response};
use http_types::{Method, Url};

/// Client for a fan's wishlist page and the wishlist items API.
///
/// Each method issues exactly one request and reads its body to completion. There is
/// no retry, no timeout beyond the transport's own, and no cookie or session state.
///
/// # Examples
///
/// ```rust,no_run
/// use bandcamp_wishlist::{ItemCategory, Result, WishlistClient};
///
/// #[tokio::main]
/// async fn main() -> Result<()> {
///     let client = WishlistClient::new(Box::new(http_client::native::NativeClient::new()));
///
///     let blob = client.fetch_page_blob().await?;
///     for item in blob.current_page_items(ItemCategory::Wishlist) {
///         println!("{}", item.item_url);
///     }
///
///     let next = client
///         .fetch_wishlist_items(blob.fan_data.fan_id, &blob.wishlist_data.last_token)
///         .await?;
///     println!("{} more items", next.items.len());
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct WishlistClient {
    client: Box<dyn HttpClient>,
    config: ClientConfig,
}

impl WishlistClient {
    /// Create a new [`WishlistClient`] pointed at the default fan on the live site.
    pub fn new(client: Box<dyn HttpClient>) -> Self {
        Self::with_config(client, ClientConfig::default())
    }

    /// Create a new [`WishlistClient`] with a custom configuration.
    ///
    /// This is useful for testing against a local server.
    pub fn with_config(client: Box<dyn HttpClient>, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET the wishlist page and return its HTML.
    pub async fn fetch_wishlist_html(&self) -> Result<String> {
        let url = parse_url(&self.config.wishlist_url())?;
        log::debug!("Fetching wishlist page {url}");

        let request = Request::new(Method::Get, url);
        let mut response = self.send(request).await?;

        let body = response
            .body_bytes()
            .await
            .map_err(|e| WishlistError::Read(e.to_string()))?;

        // Stray invalid bytes elsewhere in the page must not hide the blob.
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Fetch the wishlist page and decode the blob embedded in it.
    pub async fn fetch_page_blob(&self) -> Result<PageBlob> {
        let html = self.fetch_wishlist_html().await?;
        parse_wishlist_page(&html)
    }

    /// POST one page request to the wishlist items API.
    ///
    /// # Arguments
    ///
    /// * `fan_id` - Owner of the wishlist, from the page blob's `fan_data`
    /// * `older_than_token` - Cursor to resume after; the blob's
    ///   `wishlist_data.last_token` for the first call, then each response's `last_token`
    pub async fn fetch_wishlist_items(
        &self,
        fan_id: u64,
        older_than_token: &str,
    ) -> Result<PaginatedItemsResponse> {
        let url = parse_url(&self.config.wishlist_items_url())?;
        let payload = serde_json::to_string(&WishlistItemsRequest::new(fan_id, older_than_token))
            .map_err(|e| WishlistError::Encode(e.to_string()))?;

        log::debug!("Requesting wishlist items for fan {fan_id} older than '{older_than_token}'");

        let mut request = Request::new(Method::Post, url);
        request.insert_header("Content-Type", "application/json");
        request.set_body(payload);

        let mut response = self.send(request).await?;
        let body = response
            .body_bytes()
            .await
            .map_err(|e| WishlistError::Read(e.to_string()))?;

        parse_wishlist_items_response(&body)
    }

    async fn send(&self, request: Request) -> Result<Response> {
        let url = request.url().to_string();
        let response = self
            .client
            .send(request)
            .await
            .map_err(|e| WishlistError::Network(e.to_string()))?;

        log::debug!("{} responded with status {}", url, response.status());
        if !response.status().is_success() {
            // The body decides; an error page fails to decode further on.
            log::warn!("Non-success status {} from {}", response.status(), url);
        }

        Ok(response)
    }
}

fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| WishlistError::InvalidUrl(format!("{url}: {e}")))
}
