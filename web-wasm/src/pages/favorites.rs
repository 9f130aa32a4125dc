//! お気に入りページ

use gloo::timers::callback::Timeout;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use storefront_common::{format_price, Product};
use crate::state::use_app_state;

/// 「Clearing...」表示を続ける時間
const CLEAR_DELAY_MS: u32 = 500;

#[component]
pub fn Favorites() -> impl IntoView {
    let state = use_app_state();
    let (clearing, set_clearing) = signal(false);

    let count = move || state.favorites.with(|f| f.len());
    let total = move || state.favorites.with(|f| format_price(f.total_price()));
    let items = move || state.favorites.with(|f| f.list().to_vec());

    let on_clear = move |_: MouseEvent| {
        set_clearing.set(true);
        Timeout::new(CLEAR_DELAY_MS, move || {
            state.clear_favorites();
            set_clearing.try_set(false);
        })
        .forget();
    };

    view! {
        <Show
            when=move || { count() > 0 }
            fallback=|| view! {
                <div class="favorites-empty">
                    <h2>"No favorites yet"</h2>
                    <p class="text-muted">"Start adding products you love to your favorites!"</p>
                    <A href="/" attr:class="btn btn-primary">"Browse Products"</A>
                </div>
            }
        >
            <div class="favorites">
                <div class="favorites-header">
                    <div>
                        <h1>"My Favorites"</h1>
                        <p class="text-muted">
                            {move || format!("{} item(s) · Total {}", count(), total())}
                        </p>
                    </div>
                    <button
                        class="btn btn-secondary"
                        disabled=move || clearing.get()
                        on:click=on_clear
                    >
                        {move || if clearing.get() { "Clearing..." } else { "Clear All" }}
                    </button>
                </div>

                <div class="favorites-list">
                    <For
                        each=items
                        key=|product| product.id
                        children=|product| view! { <FavoriteRow product=product /> }
                    />
                </div>
            </div>
        </Show>
    }
}

#[component]
fn FavoriteRow(product: Product) -> impl IntoView {
    let state = use_app_state();
    let id = product.id;

    view! {
        <div class="favorite-row">
            <A href=format!("/product/{}", id) attr:class="favorite-link">
                <img src=product.image.clone() alt=product.title.clone() />
                <div class="favorite-info">
                    <span class="category">{product.category.clone()}</span>
                    <h3 class="title">{product.title.clone()}</h3>
                    <span class="price">{format_price(product.price)}</span>
                </div>
            </A>
            <button
                class="btn btn-tertiary"
                title="Remove from favorites"
                on:click=move |_| state.remove_favorite(id)
            >
                "Remove"
            </button>
        </div>
    }
}
