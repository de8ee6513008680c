//! 404 Not Found page component

use leptos::prelude::*;

use crate::router::routes;

/// Fallback view for paths outside the five known routes
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404 - 页面不存在"</h1>
            <p>"您访问的页面不存在。"</p>
            <a href=routes::HOME>"返回首页"</a>
        </div>
    }
}
