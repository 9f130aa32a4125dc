//! 商品データの型定義
//!
//! カタログAPIが返すJSONをそのまま表現する。取得後は不変で、`id` が同一性を決める。

use serde::{Deserialize, Serialize};

/// 送料無料になる価格の下限（この値を超えると無料）
pub const FREE_SHIPPING_THRESHOLD: f64 = 50.0;

/// 評価の星の数
pub const MAX_STARS: u8 = 5;

/// 商品
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}

/// 商品評価
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

impl Product {
    /// 送料無料の対象か
    pub fn ships_free(&self) -> bool {
        self.price > FREE_SHIPPING_THRESHOLD
    }

    /// 数量を掛けた小計（数量は1未満にならない）
    pub fn line_total(&self, quantity: u32) -> f64 {
        self.price * f64::from(quantity.max(1))
    }
}

impl Rating {
    /// 塗りつぶす星の数（四捨五入、0〜5に丸める）
    pub fn filled_stars(&self) -> u8 {
        let rounded = self.rate.round();
        if rounded.is_nan() || rounded <= 0.0 {
            0
        } else {
            rounded.min(f64::from(MAX_STARS)) as u8
        }
    }
}

/// 価格を `$12.30` 形式で表示
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}
