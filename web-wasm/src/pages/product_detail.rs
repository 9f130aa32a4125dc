//! 商品詳細ページ

use gloo::timers::callback::Timeout;
use leptos::ev::MouseEvent;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use storefront_common::{format_price, types::MAX_STARS, FetchStatus, Product};
use crate::components::{error_message::ErrorMessage, loading_spinner::LoadingSpinner};
use crate::share::{share_or_copy, ShareOutcome};
use crate::state::use_app_state;

/// 「Adding...」表示を続ける時間
const ADD_TO_CART_DELAY_MS: u32 = 1_000;

#[component]
pub fn ProductDetail() -> impl IntoView {
    let state = use_app_state();
    let params = use_params_map();
    let product_id = move || params.with(|p| p.get("id")).and_then(|raw| raw.parse::<u64>().ok());

    Effect::new(move |_| {
        if let Some(id) = product_id() {
            state.fetch_product(id);
        }
    });

    on_cleanup(move || {
        state.products.try_update(|cache| cache.clear_selection());
    });

    view! {
        {move || {
            if product_id().is_none() {
                return view! { <ErrorMessage message="Product not found" /> }.into_any();
            }
            let (status, selected, error) = state.products.with(|cache| {
                (cache.detail_status, cache.selected.clone(), cache.detail_error.clone())
            });
            match (status, selected) {
                (FetchStatus::Idle | FetchStatus::Loading, _) => view! { <LoadingSpinner /> }.into_any(),
                (FetchStatus::Succeeded, Some(product)) => {
                    view! { <DetailBody product=product /> }.into_any()
                }
                _ => {
                    let message = error.unwrap_or_else(|| "Product not found".to_string());
                    view! {
                        <div class="detail-missing">
                            <ErrorMessage message=message />
                            <A href="/">"Back to Products"</A>
                        </div>
                    }
                    .into_any()
                }
            }
        }}
    }
}

#[component]
fn DetailBody(product: Product) -> impl IntoView {
    let state = use_app_state();
    let (quantity, set_quantity) = signal(1u32);
    let (adding, set_adding) = signal(false);

    let id = product.id;
    let is_favorite = move || state.is_favorite(id);
    let filled = product.rating.filled_stars();
    let line_product = product.clone();
    let line_total = move || format_price(line_product.line_total(quantity.get()));

    let on_favorite = {
        let product = product.clone();
        move |_: MouseEvent| state.toggle_favorite(product.clone())
    };

    let on_add_to_cart = move |_: MouseEvent| {
        set_adding.set(true);
        let count = quantity.get_untracked();
        Timeout::new(ADD_TO_CART_DELAY_MS, move || {
            set_adding.try_set(false);
            let _ = window().alert_with_message(&format!("Added {} item(s) to cart!", count));
        })
        .forget();
    };

    let share_title = product.title.clone();
    let on_share = move |_: MouseEvent| {
        let title = share_title.clone();
        let url = window().location().href().unwrap_or_default();
        spawn_local(async move {
            let notice = match share_or_copy(&title, &url).await {
                Ok(ShareOutcome::Shared) => None,
                Ok(ShareOutcome::Copied) => Some("Link copied to clipboard!"),
                Ok(ShareOutcome::Unsupported) => Some("Sharing is not supported in this browser"),
                Err(e) => {
                    log!("share dismissed: {:?}", e);
                    None
                }
            };
            if let Some(notice) = notice {
                let _ = window().alert_with_message(notice);
            }
        });
    };

    view! {
        <div class="product-detail">
            <A href="/" attr:class="back-link">"← Back to Products"</A>

            <div class="detail-layout">
                <div class="detail-image">
                    <img src=product.image.clone() alt=product.title.clone() />
                </div>

                <div class="detail-info">
                    <span class="category">{product.category.clone()}</span>
                    <h1>{product.title.clone()}</h1>

                    <div class="rating">
                        <span class="stars">
                            {(0..MAX_STARS)
                                .map(|i| view! { <span class="star" class:filled=i < filled>"★"</span> })
                                .collect_view()}
                        </span>
                        <span class="rating-text">
                            {format!("{:.1} ({} reviews)", product.rating.rate, product.rating.count)}
                        </span>
                    </div>

                    <div class="price">{format_price(product.price)}</div>
                    {product.ships_free().then(|| view! {
                        <span class="badge badge-success">"Free Shipping"</span>
                    })}

                    <p class="description">{product.description.clone()}</p>

                    <div class="quantity">
                        <label>"Quantity"</label>
                        <div class="quantity-control">
                            <button
                                class="btn btn-secondary"
                                disabled=move || quantity.get() <= 1
                                on:click=move |_| set_quantity.update(|q| *q = q.saturating_sub(1).max(1))
                            >
                                "-"
                            </button>
                            <span class="quantity-value">{move || quantity.get()}</span>
                            <button
                                class="btn btn-secondary"
                                on:click=move |_| set_quantity.update(|q| *q += 1)
                            >
                                "+"
                            </button>
                        </div>
                        <p class="text-muted">"Total: " {line_total}</p>
                    </div>

                    <div class="actions">
                        <button
                            class="btn btn-primary"
                            disabled=move || adding.get()
                            on:click=on_add_to_cart
                        >
                            {move || if adding.get() { "Adding..." } else { "Add to Cart" }}
                        </button>
                        <button class="btn btn-secondary">"Buy Now"</button>
                        <button
                            class="btn btn-tertiary favorite-toggle"
                            class:active=is_favorite
                            on:click=on_favorite
                        >
                            {move || if is_favorite() { "♥ Saved" } else { "♡ Save" }}
                        </button>
                        <button class="btn btn-tertiary" on:click=on_share>"Share"</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
