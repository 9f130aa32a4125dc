//! 設定ファイルのテスト

use std::path::PathBuf;
use storefront::config::Config;
use storefront::error::StorefrontError;
use storefront_common::DEFAULT_BASE_URL;
use tempfile::tempdir;

/// ファイルがなければ既定値
#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");

    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout_seconds, 10);
    assert!(config.data_dir.is_none());
}

/// 保存して読み直す（親ディレクトリも作る）
#[test]
fn test_save_and_reload() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("storefront").join("config.json");

    let config = Config {
        base_url: "http://localhost:3000".to_string(),
        timeout_seconds: 3,
        data_dir: Some(PathBuf::from("/tmp/storefront-data")),
    };
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded.base_url, "http://localhost:3000");
    assert_eq!(loaded.timeout_seconds, 3);
    assert_eq!(loaded.data_dir, Some(PathBuf::from("/tmp/storefront-data")));
}

/// 一部の項目だけのファイルは残りを既定値で補う
#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"timeout_seconds": 30}"#).expect("書き込み失敗");

    let config = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout_seconds, 30);
}

/// 壊れたファイルはエラー
#[test]
fn test_malformed_file_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not json").expect("書き込み失敗");

    assert!(matches!(Config::load_from(&path), Err(StorefrontError::JsonParse(_))));
}

/// 環境変数による上書き
#[test]
fn test_env_override() {
    let mut config = Config::default();

    config.apply_env_override(None);
    assert_eq!(config.base_url, DEFAULT_BASE_URL);

    // 空白のみは無視
    config.apply_env_override(Some("   ".to_string()));
    assert_eq!(config.base_url, DEFAULT_BASE_URL);

    config.apply_env_override(Some("http://127.0.0.1:8080".to_string()));
    assert_eq!(config.base_url, "http://127.0.0.1:8080");
}

/// ベースURLの検証と保存
#[test]
fn test_set_base_url_validates_scheme() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    let mut config = Config::default();

    let result = config.set_base_url_at("ftp://example.com".to_string(), &path);
    assert!(matches!(result, Err(StorefrontError::Config(_))));
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert!(!path.exists());

    config
        .set_base_url_at("https://example.com/api".to_string(), &path)
        .expect("設定失敗");
    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded.base_url, "https://example.com/api");
}
