//! お気に入りストア
//!
//! 追加順を保ったまま `id` で一意な商品リストを保持し、
//! 変更のたびに全件をJSONで永続ストレージへ書き戻す。

use crate::error::{Error, Result};
use crate::storage::KeyValueStore;
use crate::types::Product;
use std::collections::HashSet;

/// お気に入りを保存するキー
pub const FAVORITES_KEY: &str = "favorites";

/// 起動時の読み込み結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 保存データなし
    Empty,
    /// 保存データから復元（件数）
    Restored(usize),
    /// 保存データが壊れていたため空で開始
    Recovered,
}

/// お気に入りストア
#[derive(Debug, Clone)]
pub struct FavoritesStore<S> {
    items: Vec<Product>,
    storage: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// ストレージから復元（壊れたデータは空として扱う）
    pub fn load(storage: S) -> Self {
        Self::load_with_outcome(storage).0
    }

    /// ストレージから復元し、読み込み結果も返す
    pub fn load_with_outcome(storage: S) -> (Self, LoadOutcome) {
        let (items, outcome) = match storage.get(FAVORITES_KEY) {
            Ok(None) => (Vec::new(), LoadOutcome::Empty),
            Ok(Some(raw)) => match decode_favorites(&raw) {
                Ok(items) => {
                    let count = items.len();
                    (items, LoadOutcome::Restored(count))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "resetting favorites");
                    (Vec::new(), LoadOutcome::Recovered)
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "favorites storage unreadable, starting empty");
                (Vec::new(), LoadOutcome::Recovered)
            }
        };

        (Self { items, storage }, outcome)
    }

    /// 追加（既に存在する場合は何もしない）
    ///
    /// # Returns
    /// 追加された場合 `true`
    pub fn add(&mut self, product: Product) -> Result<bool> {
        if self.is_favorite(product.id) {
            return Ok(false);
        }
        tracing::debug!(id = product.id, "adding favorite");
        let mut next = self.items.clone();
        next.push(product);
        self.commit(next)?;
        Ok(true)
    }

    /// 削除（存在しない場合も書き戻しは行う）
    ///
    /// # Returns
    /// 削除された場合 `true`
    pub fn remove(&mut self, id: u64) -> Result<bool> {
        let before = self.items.len();
        let next: Vec<Product> = self.items.iter().filter(|item| item.id != id).cloned().collect();
        let removed = next.len() != before;
        self.commit(next)?;
        Ok(removed)
    }

    /// 全件削除
    pub fn clear(&mut self) -> Result<()> {
        self.commit(Vec::new())
    }

    /// 登録済みなら削除、未登録なら追加
    ///
    /// # Returns
    /// 操作後にお気に入りであれば `true`
    pub fn toggle(&mut self, product: Product) -> Result<bool> {
        if self.is_favorite(product.id) {
            self.remove(product.id)?;
            Ok(false)
        } else {
            self.add(product)?;
            Ok(true)
        }
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// 追加順のリスト
    pub fn list(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 価格の合計
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// 書き込みに成功したときだけメモリ上のリストを差し替える
    fn commit(&mut self, next: Vec<Product>) -> Result<()> {
        let json = serde_json::to_string(&next)?;
        self.storage.set(FAVORITES_KEY, &json)?;
        tracing::debug!(count = next.len(), "favorites persisted");
        self.items = next;
        Ok(())
    }
}

/// 保存データをデコード（重複IDは先勝ちで除去）
fn decode_favorites(raw: &str) -> Result<Vec<Product>> {
    let items: Vec<Product> = serde_json::from_str(raw)
        .map_err(|e| Error::MalformedStorage(e.to_string()))?;

    let mut seen = HashSet::new();
    Ok(items.into_iter().filter(|item| seen.insert(item.id)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn product(id: u64, price: f64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price,
            category: "electronics".to_string(),
            ..Default::default()
        }
    }

    fn ids<S: KeyValueStore>(store: &FavoritesStore<S>) -> Vec<u64> {
        store.list().iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_load_empty() {
        let (store, outcome) = FavoritesStore::load_with_outcome(MemoryStore::new());
        assert!(store.is_empty());
        assert_eq!(outcome, LoadOutcome::Empty);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut store = FavoritesStore::load(MemoryStore::new());
        assert!(store.add(product(1, 10.0)).unwrap());
        assert!(!store.add(product(1, 10.0)).unwrap());
        assert!(store.add(product(2, 20.0)).unwrap());
        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn test_add_then_remove_restores_previous_set() {
        let mut store = FavoritesStore::load(MemoryStore::new());
        store.add(product(1, 10.0)).unwrap();
        store.add(product(2, 20.0)).unwrap();
        let before = ids(&store);

        store.add(product(3, 30.0)).unwrap();
        store.remove(3).unwrap();
        assert_eq!(ids(&store), before);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = FavoritesStore::load(MemoryStore::new());
        store.add(product(1, 10.0)).unwrap();
        assert!(!store.remove(42).unwrap());
        assert_eq!(ids(&store), vec![1]);
    }

    #[test]
    fn test_operation_sequence_has_no_duplicates() {
        let mut store = FavoritesStore::load(MemoryStore::new());
        let ops: &[(bool, u64)] = &[
            (true, 3), (true, 1), (true, 3), (false, 1),
            (true, 2), (true, 1), (false, 9), (true, 2),
        ];
        for &(is_add, id) in ops {
            if is_add {
                store.add(product(id, 1.0)).unwrap();
            } else {
                store.remove(id).unwrap();
            }
        }
        assert_eq!(ids(&store), vec![3, 2, 1]);
    }

    #[test]
    fn test_persist_and_reload() {
        let mut store = FavoritesStore::load(MemoryStore::new());
        store.add(product(5, 12.5)).unwrap();
        store.add(product(6, 7.5)).unwrap();

        let (reloaded, outcome) = FavoritesStore::load_with_outcome(store.into_storage());
        assert_eq!(outcome, LoadOutcome::Restored(2));
        assert_eq!(ids(&reloaded), vec![5, 6]);
        assert_eq!(reloaded.list()[0].price, 12.5);
    }

    #[test]
    fn test_clear_persists_empty_list() {
        let mut store = FavoritesStore::load(MemoryStore::new());
        store.add(product(1, 10.0)).unwrap();
        store.clear().unwrap();

        let raw = store.storage().get(FAVORITES_KEY).unwrap();
        assert_eq!(raw.as_deref(), Some("[]"));
    }

    #[test]
    fn test_malformed_storage_recovers_empty() {
        let storage = MemoryStore::with_entry(FAVORITES_KEY, "{not json");
        let (store, outcome) = FavoritesStore::load_with_outcome(storage);
        assert!(store.is_empty());
        assert_eq!(outcome, LoadOutcome::Recovered);
    }

    #[test]
    fn test_stored_duplicates_are_dropped() {
        let raw = r#"[
            {"id": 1, "title": "A", "price": 1, "category": "x"},
            {"id": 1, "title": "A again", "price": 2, "category": "x"},
            {"id": 2, "title": "B", "price": 3, "category": "x"}
        ]"#;
        let store = FavoritesStore::load(MemoryStore::with_entry(FAVORITES_KEY, raw));
        assert_eq!(ids(&store), vec![1, 2]);
        assert_eq!(store.list()[0].title, "A");
    }

    #[test]
    fn test_toggle() {
        let mut store = FavoritesStore::load(MemoryStore::new());
        assert!(store.toggle(product(4, 1.0)).unwrap());
        assert!(store.is_favorite(4));
        assert!(!store.toggle(product(4, 1.0)).unwrap());
        assert!(!store.is_favorite(4));
    }

    #[test]
    fn test_total_price() {
        let mut store = FavoritesStore::load(MemoryStore::new());
        store.add(product(1, 10.25)).unwrap();
        store.add(product(2, 4.75)).unwrap();
        assert!((store.total_price() - 15.0).abs() < 1e-9);
    }

    /// 書き込みを失敗させられるストレージ
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        failing: bool,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            if self.failing {
                return Err(Error::Storage("quota exceeded".to_string()));
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_failed_write_leaves_list_unchanged() {
        let mut store = FavoritesStore::load(FlakyStore::default());
        store.add(product(1, 10.0)).unwrap();

        store.storage.failing = true;
        assert!(store.add(product(2, 20.0)).is_err());
        assert_eq!(ids(&store), vec![1]);
        assert!(store.remove(1).is_err());
        assert!(store.clear().is_err());
        assert_eq!(ids(&store), vec![1]);

        // 書き込みが回復すれば同じ追加がやり直せる
        store.storage.failing = false;
        assert!(store.add(product(2, 20.0)).unwrap());
        let reloaded = FavoritesStore::load(store.into_storage());
        assert_eq!(ids(&reloaded), vec![1, 2]);
    }
}
