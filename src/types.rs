//! Data types for the wishlist page blob and the wishlist items API.
//!
//! Field names follow the site's JSON. Structures are decoded once per run and only
//! read afterwards.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

// ================================================================================================
// PAGE BLOB
// ================================================================================================

/// The JSON document embedded in the wishlist page's `pagedata` element.
///
/// Item ids in [`ItemPage`] sequences are keys into the matching [`ItemCache`] map.
/// Later pages come from the wishlist items API, starting at
/// `wishlist_data.last_token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageBlob {
    /// Tracks shown in the page player. Informational only.
    #[serde(default)]
    pub track_list: Vec<BlobTrack>,
    #[serde(default)]
    pub item_cache: ItemCache,
    #[serde(default)]
    pub collection_data: ItemPage,
    #[serde(default)]
    pub wishlist_data: ItemPage,
    /// Owner of the page. The fan id is required for every API call.
    pub fan_data: FanData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobTrack {
    #[serde(default, deserialize_with = "null_as_default")]
    pub band_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub album_id: u64,
}

/// Lookup tables from item id to item detail, one per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCache {
    #[serde(default, deserialize_with = "null_as_default")]
    pub collection: HashMap<String, Item>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wishlist: HashMap<String, Item>,
}

/// Ordering and pagination state for one item category.
///
/// On a wishlist page `sequence` holds the rendered ids and `pending_sequence` is
/// empty; collection data tends to be the other way round. Nothing here assumes the
/// two are exclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPage {
    /// Cursor for the next batch. Empty when the page knows of none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_token: String,
    /// Ids already rendered on the page, in display order
    #[serde(default, deserialize_with = "null_as_default")]
    pub sequence: Vec<String>,
    /// First batch of ids not yet baked into the page
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending_sequence: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanData {
    pub fan_id: u64,
}

// ================================================================================================
// ITEMS
// ================================================================================================

/// A wishlist or collection entry.
///
/// # Examples
///
/// ```rust
/// use bandcamp_wishlist::Item;
///
/// let item: Item = serde_json::from_str(
///     r#"{"added": "01 Mar 2020 10:00:00 GMT", "item_url": "https://x.bandcamp.com/album/y", "item_type": "album"}"#,
/// ).unwrap();
/// assert_eq!(item.item_type, "album");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Date the item was added, exactly as the site formats it
    #[serde(default, deserialize_with = "null_as_default")]
    pub added: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_url: String,
    /// "album", "track" or "merch"; not interpreted
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_type: String,
}

/// One batch returned by the wishlist items API.
///
/// `more_available` is informational: every item in `items` is returned regardless.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedItemsResponse {
    #[serde(rename = "track_list", default, deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub more_available: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_token: String,
}

/// Request body of the wishlist items API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WishlistItemsRequest {
    /// Fan id in decimal string form
    pub fan_id: String,
    pub older_than_token: String,
}

impl WishlistItemsRequest {
    pub fn new(fan_id: u64, older_than_token: &str) -> Self {
        Self {
            fan_id: fan_id.to_string(),
            older_than_token: older_than_token.to_string(),
        }
    }
}

// ================================================================================================
// JOIN
// ================================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCategory {
    Collection,
    Wishlist,
}

impl ItemCache {
    pub fn items(&self, category: ItemCategory) -> &HashMap<String, Item> {
        match category {
            ItemCategory::Collection => &self.collection,
            ItemCategory::Wishlist => &self.wishlist,
        }
    }

    /// Look up one item. A missing id is `None`, never an error.
    pub fn get(&self, category: ItemCategory, id: &str) -> Option<&Item> {
        self.items(category).get(id)
    }
}

impl PageBlob {
    pub fn page(&self, category: ItemCategory) -> &ItemPage {
        match category {
            ItemCategory::Collection => &self.collection_data,
            ItemCategory::Wishlist => &self.wishlist_data,
        }
    }

    /// Items rendered on the current page, in `sequence` order.
    ///
    /// Ids with no entry in the category's cache are skipped silently.
    pub fn current_page_items(&self, category: ItemCategory) -> Vec<&Item> {
        self.page(category)
            .sequence
            .iter()
            .filter_map(|id| {
                let item = self.item_cache.get(category, id);
                if item.is_none() {
                    log::debug!("Item {id} not in {category:?} cache, skipping");
                }
                item
            })
            .collect()
    }
}

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(url: &str) -> Item {
        Item {
            added: "01 Jan 2021 00:00:00 GMT".to_string(),
            item_url: url.to_string(),
            item_type: "album".to_string(),
        }
    }

    fn blob_with(sequence: &[&str], cache: &[(&str, &str)]) -> PageBlob {
        PageBlob {
            track_list: Vec::new(),
            item_cache: ItemCache {
                collection: HashMap::new(),
                wishlist: cache
                    .iter()
                    .map(|(id, url)| (id.to_string(), item(url)))
                    .collect(),
            },
            collection_data: ItemPage::default(),
            wishlist_data: ItemPage {
                last_token: "1600000000:123:a::".to_string(),
                sequence: sequence.iter().map(|s| s.to_string()).collect(),
                pending_sequence: Vec::new(),
            },
            fan_data: FanData { fan_id: 42 },
        }
    }

    fn urls(items: Vec<&Item>) -> Vec<&str> {
        items.into_iter().map(|i| i.item_url.as_str()).collect()
    }

    #[test]
    fn test_join_follows_sequence_order() {
        let blob = blob_with(&["a", "b"], &[("b", "u2"), ("a", "u1")]);
        assert_eq!(
            urls(blob.current_page_items(ItemCategory::Wishlist)),
            vec!["u1", "u2"]
        );
    }

    #[test]
    fn test_join_skips_missing_ids() {
        let blob = blob_with(&["a", "missing", "c"], &[("a", "u1"), ("c", "u3")]);
        assert_eq!(
            urls(blob.current_page_items(ItemCategory::Wishlist)),
            vec!["u1", "u3"]
        );
    }

    #[test]
    fn test_join_empty_sequence() {
        let blob = blob_with(&[], &[("a", "u1")]);
        assert!(blob.current_page_items(ItemCategory::Wishlist).is_empty());
    }

    #[test]
    fn test_join_empty_cache() {
        let blob = blob_with(&["a", "b"], &[]);
        assert!(blob.current_page_items(ItemCategory::Wishlist).is_empty());
    }

    #[test]
    fn test_join_uses_category_cache() {
        let mut blob = blob_with(&[], &[("w", "wish")]);
        blob.collection_data.sequence = vec!["c".to_string(), "w".to_string()];
        blob.item_cache
            .collection
            .insert("c".to_string(), item("owned"));

        assert_eq!(
            urls(blob.current_page_items(ItemCategory::Collection)),
            vec!["owned"]
        );
    }

    #[test]
    fn test_paginated_response_json_round_trip() {
        let response = PaginatedItemsResponse {
            items: vec![item("u1"), item("u2")],
            more_available: true,
            last_token: "1500000000:99:t::".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"track_list\""));

        let decoded: PaginatedItemsResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, response);
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let json = r#"{"track_list": null, "more_available": null, "last_token": null}"#;
        let response: PaginatedItemsResponse = serde_json::from_str(json).unwrap();
        assert!(response.items.is_empty());
        assert!(!response.more_available);
        assert_eq!(response.last_token, "");
    }

    #[test]
    fn test_request_body_uses_string_fan_id() {
        let body = serde_json::to_value(WishlistItemsRequest::new(1234, "tok")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"fan_id": "1234", "older_than_token": "tok"})
        );
    }
}
