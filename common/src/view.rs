//! 表示用リストの導出
//!
//! 商品キャッシュと絞り込み状態から、画面に出す商品列を計算する純粋関数。
//! 状態が変わるたびに呼び直す。

use crate::filter::{FilterState, SortBy, ALL_CATEGORIES};
use crate::types::Product;
use std::cmp::Ordering;

/// 絞り込み・並び替え後の商品列を返す
///
/// 1. タイトルに検索文字列を含むもの（大文字小文字を区別しない）
/// 2. カテゴリが "all" 以外なら完全一致するもの
/// 3. 並び替え（安定ソート。`Default` はキャッシュ順のまま）
///
/// 結果が空でもエラーではない（「該当なし」）。
pub fn derive_view(items: &[Product], filter: &FilterState) -> Vec<Product> {
    let needle = filter.search_query.to_lowercase();

    let mut visible: Vec<Product> = items
        .iter()
        .filter(|p| needle.is_empty() || p.title.to_lowercase().contains(&needle))
        .filter(|p| filter.category == ALL_CATEGORIES || p.category == filter.category)
        .cloned()
        .collect();

    match filter.sort_by {
        SortBy::Default => {}
        SortBy::PriceLowHigh => visible.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::PriceHighLow => visible.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortBy::TitleAsc => visible.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }

    visible
}

/// タイトル比較（大文字小文字を区別しない）
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// 「X件中Y件を表示」
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingSummary {
    pub shown: usize,
    pub total: usize,
}

impl ListingSummary {
    pub fn new(shown: usize, total: usize) -> Self {
        Self { shown, total }
    }

    pub fn is_empty(&self) -> bool {
        self.shown == 0
    }
}

impl std::fmt::Display for ListingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Showing {} of {} products", self.shown, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, price: f64, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            category: category.to_string(),
            ..Default::default()
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Red Shirt", 30.0, "clothing"),
            product(2, "Blue Hat", 10.0, "accessories"),
            product(3, "Green shirt", 20.0, "clothing"),
            product(4, "Gold Ring", 10.0, "jewelery"),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_filter_returns_items_unchanged() {
        let items = catalog();
        let view = derive_view(&items, &FilterState::new());
        assert_eq!(view, items);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = vec![
            product(1, "Red Shirt", 30.0, "clothing"),
            product(2, "Blue Hat", 10.0, "accessories"),
        ];
        let mut filter = FilterState::new();
        filter.set_search_query("shirt");
        assert_eq!(ids(&derive_view(&items, &filter)), vec![1]);

        filter.set_search_query("");
        assert_eq!(ids(&derive_view(&items, &filter)), vec![1, 2]);
    }

    #[test]
    fn test_category_is_exact_match() {
        let mut filter = FilterState::new();
        filter.set_category("clothing");
        assert_eq!(ids(&derive_view(&catalog(), &filter)), vec![1, 3]);

        filter.set_category("Clothing");
        assert!(derive_view(&catalog(), &filter).is_empty());
    }

    #[test]
    fn test_sort_price_low_high() {
        let items = vec![
            product(1, "a", 30.0, "x"),
            product(2, "b", 10.0, "x"),
            product(3, "c", 20.0, "x"),
        ];
        let mut filter = FilterState::new();
        filter.set_sort_by(SortBy::PriceLowHigh);
        let prices: Vec<f64> = derive_view(&items, &filter).iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_sort_price_high_low_is_stable() {
        let mut filter = FilterState::new();
        filter.set_sort_by(SortBy::PriceHighLow);
        // 2と4は同じ価格なので元の順序を保つ
        assert_eq!(ids(&derive_view(&catalog(), &filter)), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_sort_title_ignores_case() {
        let items = vec![product(1, "Banana", 1.0, "x"), product(2, "apple", 1.0, "x")];
        let mut filter = FilterState::new();
        filter.set_sort_by(SortBy::TitleAsc);
        let titles: Vec<String> = derive_view(&items, &filter).into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["apple".to_string(), "Banana".to_string()]);
    }

    #[test]
    fn test_search_category_and_sort_combined() {
        let mut filter = FilterState::new();
        filter.set_search_query("SHIRT");
        filter.set_category("clothing");
        filter.set_sort_by(SortBy::PriceLowHigh);
        assert_eq!(ids(&derive_view(&catalog(), &filter)), vec![3, 1]);
    }

    #[test]
    fn test_no_results() {
        let mut filter = FilterState::new();
        filter.set_search_query("laptop");
        let view = derive_view(&catalog(), &filter);
        let summary = ListingSummary::new(view.len(), catalog().len());
        assert!(summary.is_empty());
        assert_eq!(summary.to_string(), "Showing 0 of 4 products");
    }
}
