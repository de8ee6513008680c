//! Navigation header
//!
//! Pure function of (current path, session flag): highlights the active
//! route and toggles between a login link and a logout button.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::router::routes;

/// Whether the Explore link is active for `path`.
///
/// Explore is the landing page, so both the root path and `/explore`
/// count as active.
pub fn is_explore_active(path: &str) -> bool {
    path == routes::HOME || path == routes::EXPLORE
}

/// Whether a nav link targeting `route` is active for `path` (exact match).
pub fn is_exact_active(path: &str, route: &str) -> bool {
    path == route
}

/// Navigation header component
#[component]
pub fn Header(logged_in: ReadSignal<bool>, on_logout: Callback<()>) -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <header class="header">
            <div class="header-container">
                <div class="logo">
                    <a href=routes::HOME>"ScholarLink AI"</a>
                </div>

                <nav class="nav">
                    <a
                        href=routes::EXPLORE
                        class="nav-link"
                        class:active=move || is_explore_active(&pathname.get())
                    >
                        "探索"
                    </a>
                    <a
                        href=routes::FAVORITES
                        class="nav-link"
                        class:active=move || is_exact_active(&pathname.get(), routes::FAVORITES)
                    >
                        "收藏"
                    </a>
                    <a
                        href=routes::PROFILE
                        class="nav-link"
                        class:active=move || is_exact_active(&pathname.get(), routes::PROFILE)
                    >
                        "我的"
                    </a>
                    <Show
                        when=move || logged_in.get()
                        fallback=|| view! {
                            <a href=routes::LOGIN class="nav-button login">"登录"</a>
                        }
                    >
                        <button class="nav-button logout" on:click=move |_| on_logout.run(())>
                            "退出登录"
                        </button>
                    </Show>
                </nav>
            </div>
        </header>
    }
}
