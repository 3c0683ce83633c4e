//! Fixed scrape targets and the client configuration built from them.

/// Site root every request is made against.
pub const DEFAULT_BASE_URL: &str = "https://bandcamp.com";

/// Fan whose wishlist the binary prints.
pub const DEFAULT_FAN_USERNAME: &str = "space-llama";

/// Path of the paginated wishlist items endpoint, relative to the base URL.
pub const WISHLIST_ITEMS_API_PATH: &str = "/api/fancollection/1/wishlist_items";

/// Where the client sends its two requests.
///
/// The defaults point at the live site. Tests swap the base URL for a local one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Site root, e.g. `https://bandcamp.com`
    pub base_url: String,
    /// Fan username as it appears in the wishlist URL
    pub username: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: DEFAULT_FAN_USERNAME.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the fan whose wishlist is fetched
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// `<base>/<username>/wishlist`, with the username percent-encoded.
    pub fn wishlist_url(&self) -> String {
        format!(
            "{}/{}/wishlist",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.username)
        )
    }

    pub fn wishlist_items_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            WISHLIST_ITEMS_API_PATH
        )
    }
}
