//! 商品カードコンポーネント

use leptos::prelude::*;
use leptos_router::components::A;
use storefront_common::{format_price, types::MAX_STARS, Product};
use crate::state::use_app_state;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let state = use_app_state();
    let id = product.id;
    let is_favorite = move || state.is_favorite(id);
    let filled = product.rating.filled_stars();

    let on_favorite = {
        let product = product.clone();
        move |ev: leptos::ev::MouseEvent| {
            // カード全体がリンクなので遷移させない
            ev.prevent_default();
            ev.stop_propagation();
            state.toggle_favorite(product.clone());
        }
    };

    view! {
        <A href=format!("/product/{}", id) attr:class="product-card">
            <div class="product-image">
                <img src=product.image.clone() alt=product.title.clone() loading="lazy" />
                <button
                    class="favorite-toggle"
                    class:active=is_favorite
                    title=move || if is_favorite() { "Remove from favorites" } else { "Add to favorites" }
                    on:click=on_favorite
                >
                    {move || if is_favorite() { "♥" } else { "♡" }}
                </button>
            </div>
            <div class="product-info">
                <span class="category">{product.category.clone()}</span>
                <h3 class="title">{product.title.clone()}</h3>
                <div class="rating">
                    {(0..MAX_STARS)
                        .map(|i| view! { <span class="star" class:filled=move || { i < filled }>"★"</span> })
                        .collect_view()}
                    <span class="text-muted">{format!("({})", product.rating.count)}</span>
                </div>
                <div class="price-row">
                    <span class="price">{format_price(product.price)}</span>
                    {product.ships_free().then(|| view! { <span class="free-shipping">"Free Shipping"</span> })}
                </div>
                <span class="btn btn-small btn-secondary">"View Details"</span>
            </div>
        </A>
    }
}
