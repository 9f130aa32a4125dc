//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use crate::components::{error_message::ErrorMessage, navbar::Navbar};
use crate::pages::{
    favorites::Favorites,
    product_detail::ProductDetail,
    product_listing::ProductListing,
};
use crate::state::AppState;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // お気に入りは起動時に一度だけ読み込む
    provide_context(AppState::new());

    view! {
        <Router>
            <div class="app">
                <Navbar />
                <main class="main-content">
                    <Routes fallback=|| view! { <ErrorMessage message="Page not found" /> }>
                        <Route path=path!("/") view=ProductListing />
                        <Route path=path!("/product/:id") view=ProductDetail />
                        <Route path=path!("/favorites") view=Favorites />
                    </Routes>
                </main>
                <footer class="footer">
                    <p>"Product data from Fake Store API"</p>
                </footer>
            </div>
        </Router>
    }
}
