//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 通信レベルの失敗（接続不可、タイムアウトなど）
    #[error("{0}")]
    Network(String),

    #[error("Product {0} not found")]
    NotFound(u64),

    #[error("Request failed with status code {status}")]
    Http { status: u16 },

    #[error("Unexpected response: {0}")]
    Decode(String),

    /// 保存済みお気に入りが壊れている
    #[error("Stored favorites are malformed: {0}")]
    MalformedStorage(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// 画面に表示するメッセージ
    ///
    /// 通信エラーはそのまま、商品が見つからない場合は固定文言を返す
    pub fn user_message(&self) -> String {
        match self {
            Error::NotFound(_) => "Product not found".to_string(),
            other => other.to_string(),
        }
    }

    /// 「もう一度試す」を出すべきエラーか
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Http { .. } | Error::Decode(_))
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
