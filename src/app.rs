//! Main application component
//!
//! The shell owns the session state and passes it down as read-only data
//! plus two callback capabilities; pages never reach for globals.

use leptos::prelude::*;
use leptos_router::components::Router;

use crate::api::MockArticleProvider;
use crate::components::Header;
use crate::router::AppRouter;
use crate::state::Session;

/// Root application component with router integration
#[component]
pub fn App() -> impl IntoView {
    let session = Session::new();
    let on_login = Callback::new(move |_| session.login());
    let on_logout = Callback::new(move |_| session.logout());

    view! {
        <Router>
            <div class="app">
                <Header logged_in=session.logged_in() on_logout=on_logout />
                <main class="main-content">
                    <AppRouter
                        provider=MockArticleProvider
                        logged_in=session.logged_in()
                        on_login=on_login
                    />
                </main>
            </div>
        </Router>
    }
}
