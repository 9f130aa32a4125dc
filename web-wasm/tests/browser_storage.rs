//! localStorageを使うお気に入りの結合テスト（ブラウザで実行）

use storefront_common::{FavoritesStore, KeyValueStore, LoadOutcome, Product, FAVORITES_KEY};
use storefront_wasm::browser_storage::BrowserStorage;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn product(id: u64, price: f64) -> Product {
    Product {
        id,
        title: format!("Item {}", id),
        price,
        description: String::new(),
        category: "electronics".to_string(),
        image: String::new(),
        rating: Default::default(),
    }
}

fn reset() {
    BrowserStorage.remove(FAVORITES_KEY).expect("localStorageを初期化できません");
}

#[wasm_bindgen_test]
fn test_favorites_survive_reload() {
    reset();
    let mut favorites = FavoritesStore::load(BrowserStorage);
    favorites.add(product(1, 10.0)).unwrap();
    favorites.add(product(2, 20.5)).unwrap();

    let (reloaded, outcome) = FavoritesStore::load_with_outcome(BrowserStorage);
    assert_eq!(outcome, LoadOutcome::Restored(2));
    assert_eq!(reloaded.list()[0].id, 1);
    assert_eq!(reloaded.total_price(), 30.5);
    reset();
}

#[wasm_bindgen_test]
fn test_malformed_entry_starts_empty() {
    reset();
    BrowserStorage.set(FAVORITES_KEY, "{not json").unwrap();

    let (favorites, outcome) = FavoritesStore::load_with_outcome(BrowserStorage);
    assert_eq!(outcome, LoadOutcome::Recovered);
    assert!(favorites.is_empty());
    reset();
}

#[wasm_bindgen_test]
fn test_clear_persists_empty_list() {
    reset();
    let mut favorites = FavoritesStore::load(BrowserStorage);
    favorites.add(product(7, 5.0)).unwrap();
    favorites.clear().unwrap();

    assert_eq!(BrowserStorage.get(FAVORITES_KEY).unwrap().as_deref(), Some("[]"));
    reset();
}
