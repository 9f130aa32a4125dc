//! カタログAPI連携の共通部分
//!
//! URL組み立て、HTTPステータスの分類、レスポンスボディのパースを
//! ブラウザ版（fetch）とCLI版（reqwest）で共有する。

use crate::error::{Error, Result};
use crate::types::Product;

/// カタログAPIのベースURL
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// 1リクエストあたりのタイムアウト（ミリ秒）
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// 読み取り専用のカタログAPI
///
/// 1回の呼び出しにつきGETを1回だけ送る。リトライはしない。
#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// 商品一覧を取得
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// 商品を1件取得
    async fn get_product(&self, id: u64) -> Result<Product>;

    /// カテゴリ一覧を取得
    async fn list_categories(&self) -> Result<Vec<String>>;
}

/// エンドポイントURLの組み立て
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEndpoints {
    base_url: String,
}

impl CatalogEndpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn products(&self) -> String {
        format!("{}/products", self.base_url)
    }

    pub fn product(&self, id: u64) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    pub fn categories(&self) -> String {
        format!("{}/products/categories", self.base_url)
    }
}

impl Default for CatalogEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// HTTPステータスを分類
///
/// # Arguments
/// * `status` - HTTPステータスコード
/// * `product_id` - 単品取得の場合の商品ID（404をNotFoundにする）
///
/// # Returns
/// * `Ok(())` - 2xx
/// * `Err(Error::NotFound)` - 単品取得で404
/// * `Err(Error::Http)` - それ以外
pub fn classify_status(status: u16, product_id: Option<u64>) -> Result<()> {
    match (status, product_id) {
        (200..=299, _) => Ok(()),
        (404, Some(id)) => Err(Error::NotFound(id)),
        _ => Err(Error::Http { status }),
    }
}

/// 商品一覧のレスポンスをパース
pub fn parse_products(body: &str) -> Result<Vec<Product>> {
    serde_json::from_str(body)
        .map_err(|e| Error::Decode(format!("product list: {}", e)))
}

/// 単品のレスポンスをパース
///
/// 存在しないIDに対してAPIは200で空ボディ（またはnull）を返すため、
/// それらはNotFoundとして扱う。
pub fn parse_product(id: u64, body: &str) -> Result<Product> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(Error::NotFound(id));
    }
    serde_json::from_str(trimmed)
        .map_err(|e| Error::Decode(format!("product {}: {}", id, e)))
}

/// カテゴリ一覧のレスポンスをパース
pub fn parse_categories(body: &str) -> Result<Vec<String>> {
    serde_json::from_str(body)
        .map_err(|e| Error::Decode(format!("category list: {}", e)))
}
