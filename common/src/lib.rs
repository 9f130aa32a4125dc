//! Storefront Common Library
//!
//! CLIとWeb(WASM)で共有される型と状態ストア

pub mod types;
pub mod error;
pub mod storage;
pub mod catalog;
pub mod favorites;
pub mod product_cache;
pub mod filter;
pub mod view;
pub mod debounce;

pub use types::{Product, Rating, format_price};
pub use error::{Error, Result};
pub use storage::{KeyValueStore, MemoryStore};
pub use catalog::{
    Catalog, CatalogEndpoints, DEFAULT_BASE_URL, REQUEST_TIMEOUT_MS,
    parse_products, parse_product, parse_categories, classify_status,
};
pub use favorites::{FavoritesStore, LoadOutcome, FAVORITES_KEY};
pub use product_cache::{FetchStatus, ProductCache};
pub use filter::{FilterState, SortBy, ALL_CATEGORIES};
pub use view::{derive_view, ListingSummary};
pub use debounce::{Debouncer, Ticket, SEARCH_DEBOUNCE_MS};
