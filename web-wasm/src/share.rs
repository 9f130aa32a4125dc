//! 共有ボタン
//!
//! Web Share APIがあればそれを使い、なければURLをクリップボードにコピーする。
//! どちらのAPIもブラウザによって存在しないため、プロパティの有無で判定する。

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// 共有の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// 共有シートを開いた
    Shared,
    /// URLをクリップボードにコピーした
    Copied,
    /// どちらも使えない
    Unsupported,
}

/// `navigator.share` に渡すデータ
pub fn share_payload(title: &str, url: &str) -> Result<Object, JsValue> {
    let payload = Object::new();
    Reflect::set(&payload, &"title".into(), &title.into())?;
    Reflect::set(&payload, &"text".into(), &format!("Check out {}", title).into())?;
    Reflect::set(&payload, &"url".into(), &url.into())?;
    Ok(payload)
}

/// 共有、またはURLのコピー
///
/// ユーザーが共有シートを閉じた場合は `Err`（AbortError）になる
pub async fn share_or_copy(title: &str, url: &str) -> Result<ShareOutcome, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let navigator = window.navigator();

    if let Some(share) = method(&navigator, "share")? {
        let payload = share_payload(title, url)?;
        call_and_wait(&share, &navigator, &payload).await?;
        return Ok(ShareOutcome::Shared);
    }

    let clipboard = Reflect::get(&navigator, &"clipboard".into())?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Ok(ShareOutcome::Unsupported);
    }
    match method(&clipboard, "writeText")? {
        Some(write_text) => {
            call_and_wait(&write_text, &clipboard, &url.into()).await?;
            Ok(ShareOutcome::Copied)
        }
        None => Ok(ShareOutcome::Unsupported),
    }
}

/// 関数であるプロパティを取り出す
fn method(target: &JsValue, name: &str) -> Result<Option<Function>, JsValue> {
    let value = Reflect::get(target, &name.into())?;
    Ok(value.dyn_into::<Function>().ok())
}

async fn call_and_wait(function: &Function, this: &JsValue, arg: &JsValue) -> Result<(), JsValue> {
    let promise: Promise = function.call1(this, arg)?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}
