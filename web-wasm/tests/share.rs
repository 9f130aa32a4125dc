//! 共有データの組み立てテスト（ブラウザで実行）

use js_sys::Reflect;
use storefront_wasm::share::share_payload;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn field(payload: &js_sys::Object, name: &str) -> Option<String> {
    Reflect::get(payload, &name.into())
        .expect("プロパティを読めません")
        .as_string()
}

#[wasm_bindgen_test]
fn test_share_payload_fields() {
    let payload = share_payload("Backpack", "https://example.com/product/1")
        .expect("共有データを作れません");

    assert_eq!(field(&payload, "title").as_deref(), Some("Backpack"));
    assert_eq!(field(&payload, "text").as_deref(), Some("Check out Backpack"));
    assert_eq!(field(&payload, "url").as_deref(), Some("https://example.com/product/1"));
}
