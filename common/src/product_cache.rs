//! 商品キャッシュ
//!
//! 最後に取得した商品一覧、表示中の商品、取得状態を保持する。
//! 新しい取得はどの状態からでも `Loading` に戻る。並行した取得の順序は保証せず、
//! 最後に完了したものが反映される。

use crate::error::Result;
use crate::types::Product;

/// 非同期取得の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl FetchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Loading => "loading",
            FetchStatus::Succeeded => "succeeded",
            FetchStatus::Failed => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }
}

/// 商品キャッシュの状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCache {
    pub items: Vec<Product>,
    pub status: FetchStatus,
    pub error: Option<String>,
    /// 失敗した一覧取得をやり直す価値があるか
    pub retryable: bool,
    pub selected: Option<Product>,
    /// 詳細画面用の取得状態
    pub detail_status: FetchStatus,
    pub detail_error: Option<String>,
}

impl ProductCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch_all(&mut self) {
        self.status = FetchStatus::Loading;
    }

    /// 一覧を丸ごと置き換え、前回のエラーを消す
    pub fn fetch_all_succeeded(&mut self, items: Vec<Product>) {
        tracing::debug!(count = items.len(), "product list loaded");
        self.status = FetchStatus::Succeeded;
        self.error = None;
        self.retryable = false;
        self.items = items;
    }

    pub fn fetch_all_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "product list failed");
        self.status = FetchStatus::Failed;
        self.error = Some(message);
        self.retryable = true;
    }

    /// 一覧取得の結果を状態遷移に変換
    pub fn apply_fetch_all(&mut self, outcome: Result<Vec<Product>>) {
        match outcome {
            Ok(items) => self.fetch_all_succeeded(items),
            Err(e) => {
                self.fetch_all_failed(e.to_string());
                self.retryable = e.is_retryable();
            }
        }
    }

    pub fn select_product(&mut self, product: Product) {
        self.selected = Some(product);
    }

    /// 詳細画面を離れたときに呼ぶ
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.detail_status = FetchStatus::Idle;
        self.detail_error = None;
    }

    pub fn begin_fetch_one(&mut self) {
        self.detail_status = FetchStatus::Loading;
        self.detail_error = None;
    }

    /// 単品取得の結果を状態遷移に変換（成功時は選択状態にする）
    pub fn apply_fetch_one(&mut self, outcome: Result<Product>) {
        match outcome {
            Ok(product) => {
                self.detail_status = FetchStatus::Succeeded;
                self.select_product(product);
            }
            Err(e) => {
                self.detail_status = FetchStatus::Failed;
                self.detail_error = Some(e.user_message());
            }
        }
    }

    /// キャッシュ済みの一覧から商品を探す
    pub fn find(&self, id: u64) -> Option<&Product> {
        self.items.iter().find(|item| item.id == id)
    }
}
