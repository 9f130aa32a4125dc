//! アプリケーション状態
//!
//! 商品キャッシュ、絞り込み状態、お気に入りストアとカタログAPIを1つにまとめる。
//! 呼び出し側が所有し、参照で渡す。

use storefront_common::{
    derive_view, Catalog, FavoritesStore, FetchStatus, FilterState, KeyValueStore,
    ListingSummary, Product, ProductCache, Result,
};

pub struct Storefront<C, S> {
    catalog: C,
    pub products: ProductCache,
    pub filters: FilterState,
    pub favorites: FavoritesStore<S>,
}

impl<C: Catalog, S: KeyValueStore> Storefront<C, S> {
    pub fn new(catalog: C, storage: S) -> Self {
        Self {
            catalog,
            products: ProductCache::new(),
            filters: FilterState::new(),
            favorites: FavoritesStore::load(storage),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// 商品一覧を取得してキャッシュに反映
    pub async fn refresh_products(&mut self) -> FetchStatus {
        self.products.begin_fetch_all();
        let outcome = self.catalog.list_products().await;
        self.products.apply_fetch_all(outcome);
        self.products.status
    }

    /// カテゴリ一覧を取得して既知のカテゴリにする
    pub async fn load_categories(&mut self) -> Result<()> {
        let categories = self.catalog.list_categories().await?;
        self.filters.set_known_categories(categories);
        Ok(())
    }

    /// 商品詳細を取得して選択状態にする
    pub async fn open_product(&mut self, id: u64) -> FetchStatus {
        self.products.begin_fetch_one();
        let outcome = self.catalog.get_product(id).await;
        self.products.apply_fetch_one(outcome);
        self.products.detail_status
    }

    pub fn close_product(&mut self) {
        self.products.clear_selection();
    }

    /// 表示する商品列
    pub fn visible_products(&self) -> Vec<Product> {
        derive_view(&self.products.items, &self.filters)
    }

    pub fn summary(&self) -> ListingSummary {
        ListingSummary::new(self.visible_products().len(), self.products.items.len())
    }

    /// IDでお気に入りに追加（キャッシュになければ取得する）
    ///
    /// # Returns
    /// 新たに追加された場合 `true`
    pub async fn add_favorite_by_id(&mut self, id: u64) -> Result<bool> {
        let cached = self
            .products
            .selected
            .as_ref()
            .filter(|p| p.id == id)
            .or_else(|| self.products.find(id))
            .cloned();

        let product = match cached {
            Some(product) => product,
            None => self.catalog.get_product(id).await?,
        };
        self.favorites.add(product)
    }
}
