use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("{0}")]
    Catalog(#[from] storefront_common::Error),

    /// 取得失敗（もう一度実行すれば再試行できる）
    #[error("{0}\nもう一度実行してください")]
    LoadFailed(String),

    #[error("{0}")]
    Unavailable(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    ClientInit(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
