use crate::error::{StorefrontError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storefront_common::{DEFAULT_BASE_URL, REQUEST_TIMEOUT_MS};

/// ベースURLを上書きする環境変数
pub const BASE_URL_ENV: &str = "STOREFRONT_BASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// お気に入りの保存先（省略時はOSのデータディレクトリ）
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_seconds: u64::from(REQUEST_TIMEOUT_MS / 1000),
            data_dir: None,
        }
    }
}

impl Config {
    /// 既定の場所から読み込み、環境変数の上書きを適用
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env_override(std::env::var(BASE_URL_ENV).ok());
        Ok(config)
    }

    /// 指定したファイルから読み込む（ファイルがなければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 環境変数の値でベースURLを上書き（空白のみの値は無視）
    pub fn apply_env_override(&mut self, value: Option<String>) {
        if let Some(url) = value {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| StorefrontError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("storefront").join("config.json"))
    }

    /// お気に入りを保存するディレクトリ
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_dir()
            .ok_or_else(|| StorefrontError::Config("データディレクトリが見つかりません".into()))?;
        Ok(base.join("storefront"))
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        self.set_base_url_at(url, &Self::config_path()?)
    }

    /// ベースURLを検証して設定し、指定したファイルに保存
    pub fn set_base_url_at(&mut self, url: String, path: &Path) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(StorefrontError::Config(format!("URLが不正です: {}", url)));
        }
        self.base_url = url;
        self.save_to(path)
    }
}
