//! カタログAPI連携（ブラウザのfetch）
//!
//! 1リクエストごとにタイマーと競争させ、期限を過ぎたら通信エラーにする。
//! 期限切れになったリクエスト自体は中断しない。

use futures::future::{select, Either};
use gloo::timers::future::TimeoutFuture;
use storefront_common::{
    classify_status, parse_categories, parse_product, parse_products, Catalog, CatalogEndpoints,
    Error, Product, Result, REQUEST_TIMEOUT_MS,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// ブラウザ版カタログクライアント
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    endpoints: CatalogEndpoints,
    timeout_ms: u32,
}

impl HttpCatalog {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoints: CatalogEndpoints::new(base_url),
            timeout_ms: REQUEST_TIMEOUT_MS,
        }
    }

    /// 期限付きGET
    async fn get_text(&self, url: &str, product_id: Option<u64>) -> Result<String> {
        let request = Box::pin(fetch_text(url.to_string(), product_id));
        let deadline = Box::pin(TimeoutFuture::new(self.timeout_ms));

        match select(request, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(Error::Network(format!(
                "timeout of {}ms exceeded",
                self.timeout_ms
            ))),
        }
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self {
            endpoints: CatalogEndpoints::default(),
            timeout_ms: REQUEST_TIMEOUT_MS,
        }
    }
}

impl Catalog for HttpCatalog {
    async fn list_products(&self) -> Result<Vec<Product>> {
        let body = self.get_text(&self.endpoints.products(), None).await?;
        parse_products(&body)
    }

    async fn get_product(&self, id: u64) -> Result<Product> {
        let body = self.get_text(&self.endpoints.product(id), Some(id)).await?;
        parse_product(id, &body)
    }

    async fn list_categories(&self) -> Result<Vec<String>> {
        let body = self.get_text(&self.endpoints.categories(), None).await?;
        parse_categories(&body)
    }
}

/// fetchでGETしてボディを文字列で返す
async fn fetch_text(url: String, product_id: Option<u64>) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Network("window is unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    classify_status(resp.status(), product_id)?;

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(text.as_string().unwrap_or_default())
}

/// JSの例外を通信エラーに変換
fn js_error(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "Network Error".to_string());
    Error::Network(message)
}
