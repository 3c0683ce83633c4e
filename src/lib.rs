pub mod client;
pub mod config;
pub mod error;
pub mod iterator;
pub mod listing;
pub mod parsing;
pub mod source;
pub mod types;

pub use client::WishlistClient;
pub use config::ClientConfig;
pub use error::WishlistError;
pub use iterator::{AsyncPaginatedIterator, WishlistItemsIterator};
pub use listing::{print_wishlist, write_item_urls, ListingSummary};
pub use source::WishlistSource;
pub use types::{
    BlobTrack, FanData, Item, ItemCache, ItemCategory, ItemPage, PageBlob,
    PaginatedItemsResponse,
};

#[cfg(feature = "mock")]
pub use source::MockWishlistSource;

pub type Result<T> = std::result::Result<T, WishlistError>;
