//! キー・バリュー永続化ストレージ
//!
//! ブラウザではlocalStorage、CLIではファイル、テストではメモリで実装する。

use crate::error::Result;
use std::collections::HashMap;

/// 文字列を保存する永続ストレージ
pub trait KeyValueStore {
    /// キーの値を読み込む（存在しなければNone）
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// キーに値を書き込む
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// キーを削除する
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// メモリ上のストレージ（テスト用・永続化なし）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期値付きで作成
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("favorites").unwrap(), None);

        store.set("favorites", "[]").unwrap();
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.len(), 1);

        store.remove("favorites").unwrap();
        assert!(store.is_empty());
    }
}
