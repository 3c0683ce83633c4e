use thiserror::Error;

/// Error types for wishlist scraping.
///
/// Every variant aborts the run. Nothing is retried, and any URLs already written
/// stay written.
///
/// # Error Handling Examples
///
/// ```rust,no_run
/// use bandcamp_wishlist::{WishlistClient, WishlistError};
///
/// #[tokio::main]
/// async fn main() {
///     let client = WishlistClient::new(Box::new(http_client::native::NativeClient::new()));
///
///     match client.fetch_page_blob().await {
///         Ok(blob) => println!("fan id {}", blob.fan_data.fan_id),
///         Err(WishlistError::BlobNotFound) => eprintln!("page layout changed"),
///         Err(WishlistError::Network(msg)) => eprintln!("Network error: {}", msg),
///         Err(e) => std::process::exit(e.exit_code()),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum WishlistError {
    /// The connection could not be established or the transport failed.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be read to completion.
    #[error("Failed to read response body: {0}")]
    Read(String),

    /// The wishlist HTML has no `pagedata` element carrying a `data-blob` attribute.
    ///
    /// This usually means the user does not exist, the wishlist is private, or the
    /// site markup changed.
    #[error("No pagedata blob found in wishlist page")]
    BlobNotFound,

    /// The embedded blob is not valid JSON or does not match [`PageBlob`](crate::PageBlob).
    #[error("Malformed page blob: {0}")]
    MalformedBlob(String),

    /// The wishlist items API answered with something other than
    /// [`PaginatedItemsResponse`](crate::PaginatedItemsResponse) JSON.
    #[error("Malformed wishlist items response: {0}")]
    MalformedResponse(String),

    /// The configured base URL and username do not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The API request body could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// Writing the listing failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WishlistError {
    /// Process exit code for this error.
    ///
    /// Each kind has its own nonzero code so calling scripts can tell failures apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            WishlistError::Network(_) => 2,
            WishlistError::Read(_) => 3,
            WishlistError::BlobNotFound => 4,
            WishlistError::MalformedBlob(_) => 5,
            WishlistError::MalformedResponse(_) => 6,
            WishlistError::InvalidUrl(_) => 7,
            WishlistError::Encode(_) => 8,
            WishlistError::Io(_) => 9,
        }
    }
}
