//! ナビゲーションバー

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use crate::state::use_app_state;

#[component]
pub fn Navbar() -> impl IntoView {
    let state = use_app_state();
    let pathname = use_location().pathname;
    let favorite_count = move || state.favorites.with(|f| f.len());

    let link_class = move |path: &'static str| {
        move || {
            if pathname.get() == path {
                "nav-link active"
            } else {
                "nav-link"
            }
        }
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="brand">"FakeStore"</A>
            <div class="nav-links">
                <A href="/" attr:class=link_class("/")>"Home"</A>
                <A href="/favorites" attr:class=link_class("/favorites")>
                    "Favorites"
                    <Show when=move || { favorite_count() > 0 }>
                        <span class="badge">{favorite_count}</span>
                    </Show>
                </A>
            </div>
        </nav>
    }
}
