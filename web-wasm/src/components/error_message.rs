//! エラー表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn ErrorMessage(
    #[prop(into)] message: String,
    /// 指定した場合のみ「Try Again」ボタンを出す
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-message" role="alert">
            <h3>"Oops!"</h3>
            <p>{message}</p>
            {on_retry.map(|on_retry| view! {
                <button class="btn btn-primary" on:click=move |_| on_retry.run(())>
                    "Try Again"
                </button>
            })}
        </div>
    }
}
