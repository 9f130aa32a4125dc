//! アプリケーション状態
//!
//! ルートコンポーネントが作成し、コンテキストで各ページに渡す。
//! 取得処理は状態を `Loading` にしてからタスクを起動し、結果を状態遷移に変換する。

use crate::api::HttpCatalog;
use crate::browser_storage::BrowserStorage;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_common::{
    derive_view, Catalog, FavoritesStore, FilterState, ListingSummary, LoadOutcome, Product,
    ProductCache, DEFAULT_BASE_URL,
};

#[derive(Clone, Copy)]
pub struct AppState {
    pub products: RwSignal<ProductCache>,
    pub filters: RwSignal<FilterState>,
    pub favorites: RwSignal<FavoritesStore<BrowserStorage>>,
    catalog: StoredValue<HttpCatalog>,
}

impl AppState {
    pub fn new() -> Self {
        let (favorites, outcome) = FavoritesStore::load_with_outcome(BrowserStorage);
        if outcome == LoadOutcome::Recovered {
            warn!("stored favorites were unreadable; starting with an empty list");
        }

        Self {
            products: RwSignal::new(ProductCache::new()),
            filters: RwSignal::new(FilterState::new()),
            favorites: RwSignal::new(favorites),
            catalog: StoredValue::new(HttpCatalog::new(DEFAULT_BASE_URL)),
        }
    }

    /// 商品一覧を取得
    pub fn fetch_products(&self) {
        self.products.update(|cache| cache.begin_fetch_all());

        let catalog = self.catalog.get_value();
        let products = self.products;
        spawn_local(async move {
            let outcome = catalog.list_products().await;
            if let Err(e) = &outcome {
                warn!("product list failed: {}", e);
            }
            products.try_update(|cache| cache.apply_fetch_all(outcome));
        });
    }

    /// カテゴリ一覧を取得（失敗してもカテゴリが空のままになるだけ）
    pub fn fetch_categories(&self) {
        let catalog = self.catalog.get_value();
        let filters = self.filters;
        spawn_local(async move {
            match catalog.list_categories().await {
                Ok(categories) => {
                    filters.try_update(|f| f.set_known_categories(categories));
                }
                Err(e) => warn!("category list failed: {}", e),
            }
        });
    }

    /// 商品を1件取得して選択状態にする
    pub fn fetch_product(&self, id: u64) {
        self.products.update(|cache| cache.begin_fetch_one());

        let catalog = self.catalog.get_value();
        let products = self.products;
        spawn_local(async move {
            let outcome = catalog.get_product(id).await;
            products.try_update(|cache| cache.apply_fetch_one(outcome));
        });
    }

    pub fn toggle_favorite(&self, product: Product) {
        self.favorites.update(|favorites| {
            if let Err(e) = favorites.toggle(product) {
                warn!("failed to save favorites: {}", e);
            }
        });
    }

    pub fn remove_favorite(&self, id: u64) {
        self.favorites.update(|favorites| {
            if let Err(e) = favorites.remove(id) {
                warn!("failed to save favorites: {}", e);
            }
        });
    }

    pub fn clear_favorites(&self) {
        self.favorites.update(|favorites| {
            if let Err(e) = favorites.clear() {
                warn!("failed to save favorites: {}", e);
            }
        });
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.favorites.with(|favorites| favorites.is_favorite(id))
    }

    /// 表示する商品列（キャッシュと絞り込み状態を購読する）
    pub fn visible_products(&self) -> Vec<Product> {
        self.products
            .with(|cache| self.filters.with(|filter| derive_view(&cache.items, filter)))
    }

    pub fn summary(&self) -> ListingSummary {
        let total = self.products.with(|cache| cache.items.len());
        ListingSummary::new(self.visible_products().len(), total)
    }
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
