//! localStorageによるキー・バリューストレージ

use gloo::storage::{LocalStorage, Storage};
use storefront_common::{Error, KeyValueStore, Result};
use wasm_bindgen::JsValue;

/// ブラウザのlocalStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw().get_item(key).map_err(storage_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw().set_item(key, value).map_err(storage_error)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        LocalStorage::raw().remove_item(key).map_err(storage_error)
    }
}

fn storage_error(value: JsValue) -> Error {
    Error::Storage(format!("{:?}", value))
}
