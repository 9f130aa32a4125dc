//! 商品一覧ページ
//!
//! 表示のたびに商品とカテゴリを取得し直す。検索入力は静止期間が過ぎてから反映する。

use gloo::timers::callback::Timeout;
use leptos::ev::MouseEvent;
use leptos::html;
use leptos::prelude::*;
use storefront_common::{Debouncer, FetchStatus, SortBy, ALL_CATEGORIES};
use crate::components::{
    error_message::ErrorMessage,
    loading_spinner::LoadingSpinner,
    product_card::ProductCard,
};
use crate::state::use_app_state;

#[component]
pub fn ProductListing() -> impl IntoView {
    let state = use_app_state();
    state.fetch_products();
    state.fetch_categories();

    // 詳細取得など一覧以外の変化では一覧を作り直さない
    let status = Memo::new(move |_| state.products.with(|cache| cache.status));

    view! {
        {move || match status.get() {
            FetchStatus::Idle | FetchStatus::Loading => view! { <LoadingSpinner /> }.into_any(),
            FetchStatus::Failed => {
                let message = state
                    .products
                    .with(|cache| cache.error.clone())
                    .unwrap_or_else(|| "Failed to load products".to_string());
                if state.products.with_untracked(|cache| cache.retryable) {
                    let retry = Callback::new(move |_| state.fetch_products());
                    view! { <ErrorMessage message=message on_retry=retry /> }.into_any()
                } else {
                    view! { <ErrorMessage message=message /> }.into_any()
                }
            }
            FetchStatus::Succeeded => view! { <ListingBody /> }.into_any(),
        }}
    }
}

#[component]
fn ListingBody() -> impl IntoView {
    let state = use_app_state();
    let (show_filters, set_show_filters) = signal(false);
    let search_input = NodeRef::<html::Input>::new();

    let debouncer = StoredValue::new_local(Debouncer::<String>::for_search());
    let pending_timer = StoredValue::new_local(None::<Timeout>);

    let schedule_search = move |text: String| {
        let Some(ticket) = debouncer.try_update_value(|d| d.schedule(text)) else {
            return;
        };
        let quiet_ms = debouncer.with_value(|d| d.quiet_period().as_millis() as u32);

        let timer = Timeout::new(quiet_ms, move || {
            if let Some(query) = debouncer.try_update_value(|d| d.fire(ticket)).flatten() {
                state.filters.try_update(|f| f.set_search_query(query));
            }
        });
        // 前のタイマーは破棄と同時に取り消される
        pending_timer.set_value(Some(timer));
    };

    let on_reset = move |_: MouseEvent| {
        debouncer.update_value(|d| d.cancel());
        pending_timer.set_value(None);
        // 入力欄は非制御なので値を直接消す
        if let Some(input) = search_input.get_untracked() {
            input.set_value("");
        }
        state.filters.update(|f| f.reset());
    };

    on_cleanup(move || {
        pending_timer.try_update_value(|timer| timer.take());
    });

    let summary = move || state.summary();
    let current_category = move || state.filters.with(|f| f.category.clone());
    let categories = move || state.filters.with(|f| f.known_categories.clone());

    view! {
        <div class="listing">
            <div class="listing-header">
                <div>
                    <h1>"Products"</h1>
                    <p class="text-muted">{move || summary().to_string()}</p>
                </div>
                <button
                    class="btn btn-secondary filter-toggle"
                    on:click=move |_| set_show_filters.update(|v| *v = !*v)
                >
                    {move || if show_filters.get() { "Hide Filters" } else { "Filters" }}
                </button>
            </div>

            <div class="listing-layout">
                <aside class="filters" class:open=move || show_filters.get()>
                    <div class="form-group">
                        <label for="search">"Search"</label>
                        <input
                            type="search"
                            id="search"
                            placeholder="Search products..."
                            node_ref=search_input
                            value=state.filters.with_untracked(|f| f.search_query.clone())
                            on:input=move |ev| schedule_search(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Categories"</label>
                        <button
                            class="category-option"
                            class:active=move || current_category() == ALL_CATEGORIES
                            on:click=move |_| state.filters.update(|f| f.set_category(ALL_CATEGORIES))
                        >
                            "All Categories"
                        </button>
                        <For
                            each=categories
                            key=|name| name.clone()
                            children=move |name| {
                                let selected = name.clone();
                                let label = name.clone();
                                view! {
                                    <button
                                        class="category-option"
                                        class:active=move || current_category() == name
                                        on:click=move |_| {
                                            let selected = selected.clone();
                                            state.filters.update(|f| f.set_category(selected));
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="sort">"Sort By"</label>
                        <select
                            id="sort"
                            on:change=move |ev| {
                                let mode = event_target_value(&ev).parse::<SortBy>().unwrap_or_default();
                                state.filters.update(|f| f.set_sort_by(mode));
                            }
                        >
                            {SortBy::ALL
                                .into_iter()
                                .map(|mode| view! {
                                    <option
                                        value=mode.as_str()
                                        selected=move || state.filters.with(|f| f.sort_by == mode)
                                    >
                                        {mode.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <Show when=move || state.filters.with(|f| !f.is_default())>
                        <button class="btn btn-tertiary" on:click=on_reset>
                            "Reset Filters"
                        </button>
                    </Show>
                </aside>

                <section class="product-grid-wrapper">
                    <Show
                        when=move || !summary().is_empty()
                        fallback=move || view! {
                            <div class="no-results">
                                <h3>"No products found"</h3>
                                <p class="text-muted">"Try adjusting your search or filters"</p>
                                <Show when=move || state.filters.with(|f| f.is_narrowed())>
                                    <button class="btn btn-primary" on:click=on_reset>
                                        "Reset Filters"
                                    </button>
                                </Show>
                            </div>
                        }
                    >
                        <div class="product-grid">
                            <For
                                each=move || state.visible_products()
                                key=|product| product.id
                                children=|product| view! { <ProductCard product=product /> }
                            />
                        </div>
                    </Show>
                </section>
            </div>
        </div>
    }
}
