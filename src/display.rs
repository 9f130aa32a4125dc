//! ターミナル表示の整形

use storefront_common::{format_price, FavoritesStore, KeyValueStore, ListingSummary, Product, Rating};

const STAR_FILLED: char = '★';
const STAR_EMPTY: char = '☆';

/// 評価を星で表示
pub fn stars(rating: &Rating) -> String {
    let filled = usize::from(rating.filled_stars());
    let mut out = String::new();
    for i in 0..usize::from(storefront_common::types::MAX_STARS) {
        out.push(if i < filled { STAR_FILLED } else { STAR_EMPTY });
    }
    out
}

/// 一覧の1行
pub fn product_line(product: &Product, is_favorite: bool) -> String {
    let heart = if is_favorite { "♥" } else { " " };
    let shipping = if product.ships_free() { "  Free Shipping" } else { "" };
    format!(
        "{} #{:<4} {:<50} {:>9}  {} ({})  [{}]{}",
        heart,
        product.id,
        truncate(&product.title, 50),
        format_price(product.price),
        stars(&product.rating),
        product.rating.count,
        product.category,
        shipping,
    )
}

/// 一覧全体
pub fn listing(products: &[Product], summary: ListingSummary, is_favorite: impl Fn(u64) -> bool) -> String {
    let mut out = format!("{}\n", summary);
    if summary.is_empty() {
        out.push_str("\nNo products found. Try adjusting your search or filters.\n");
        return out;
    }
    for product in products {
        out.push('\n');
        out.push_str(&product_line(product, is_favorite(product.id)));
    }
    out.push('\n');
    out
}

/// 商品詳細
pub fn product_detail(product: &Product, quantity: u32, is_favorite: bool) -> String {
    let quantity = quantity.max(1);
    let mut out = String::new();
    out.push_str(&format!("[{}]\n", product.category));
    out.push_str(&format!("{}\n", product.title));
    out.push_str(&format!(
        "{} {} • {} reviews\n",
        stars(&product.rating),
        product.rating.rate,
        product.rating.count
    ));
    out.push_str(&format!("\n{}\n", format_price(product.price)));
    out.push_str("In stock • Ready to ship\n");
    out.push_str(&format!("\n{}\n", product.description));
    out.push_str(&format!(
        "\nQuantity: {}  Total: {}\n",
        quantity,
        format_price(product.line_total(quantity))
    ));
    out.push_str(&format!("Image: {}\n", product.image));
    out.push_str(if is_favorite { "♥ Saved\n" } else { "♡ Save with `storefront favorites add`\n" });
    out
}

/// お気に入りの件数と合計
pub fn favorites_header<S: KeyValueStore>(favorites: &FavoritesStore<S>) -> String {
    let count = favorites.len();
    let noun = if count == 1 { "item" } else { "items" };
    format!("{} {} • Total: {}", count, noun, format_price(favorites.total_price()))
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// 削除結果（一覧になかった場合も正常終了）
pub fn removal_notice(id: u64, removed: bool) -> String {
    if removed {
        format!("✔ お気に入りから削除しました: #{}", id)
    } else {
        format!("お気に入りにありません: #{}", id)
    }
}
