//! Favorites page component
//!
//! Login-gated: without a session it shows a prompt pointing at the login
//! route; with one it shows the empty state (no favorites source exists yet).

use leptos::prelude::*;

use crate::router::routes;

/// Favorites page component
#[component]
pub fn Favorites(logged_in: ReadSignal<bool>) -> impl IntoView {
    view! {
        <div class="favorites-container">
            <Show
                when=move || logged_in.get()
                fallback=|| view! {
                    <div class="login-prompt">
                        <h2>"我的收藏"</h2>
                        <p>"请先登录以查看您的收藏论文"</p>
                        <a href=routes::LOGIN class="btn-login">"立即登录"</a>
                    </div>
                }
            >
                <div class="favorites-header">
                    <h1>"我的收藏"</h1>
                    <p>"您收藏的论文和文章"</p>
                </div>

                <div class="favorites-content">
                    <div class="empty-state">
                        <div class="empty-icon">"📚"</div>
                        <h3>"暂无收藏"</h3>
                        <p>"开始探索并收藏您感兴趣的论文吧！"</p>
                        <a href=routes::EXPLORE class="btn-primary">"去探索"</a>
                    </div>
                </div>
            </Show>
        </div>
    }
}
