//! 読み込み中表示

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner" />
            <p class="text-muted">"Loading..."</p>
        </div>
    }
}
