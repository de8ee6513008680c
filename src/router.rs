//! Router configuration for the ScholarLink UI
//!
//! Five known paths, each mapped to exactly one page component; everything
//! else falls back to the 404 page.

use leptos::prelude::*;
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Routes};

use crate::api::provider::ArticleProvider;
use crate::pages::{Explore, Favorites, Login, NotFound, Profile};

/// Route definitions as constants for type safety
pub mod routes {
    pub const HOME: &str = "/";
    pub const EXPLORE: &str = "/explore";
    pub const FAVORITES: &str = "/favorites";
    pub const PROFILE: &str = "/profile";
    pub const LOGIN: &str = "/login";
}

/// Routed outlet mapping paths to pages.
///
/// Session state arrives as a read-only signal plus the login callback; the
/// article provider is injected here so the mock and a real client swap at
/// a single seam.
#[component]
pub fn AppRouter<P>(
    provider: P,
    logged_in: ReadSignal<bool>,
    on_login: Callback<()>,
) -> impl IntoView
where
    P: ArticleProvider + Clone + Send + Sync + 'static,
{
    let provider_root = provider.clone();
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route
                path=StaticSegment("")
                view=move || view! { <Explore provider=provider_root.clone() /> }
            />
            <Route
                path=StaticSegment("explore")
                view=move || view! { <Explore provider=provider.clone() /> }
            />
            <Route
                path=StaticSegment("favorites")
                view=move || view! { <Favorites logged_in=logged_in /> }
            />
            <Route
                path=StaticSegment("profile")
                view=move || view! { <Profile logged_in=logged_in /> }
            />
            <Route
                path=StaticSegment("login")
                view=move || view! { <Login on_login=on_login /> }
            />
        </Routes>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_constants() {
        assert_eq!(routes::HOME, "/");
        assert_eq!(routes::EXPLORE, "/explore");
        assert_eq!(routes::FAVORITES, "/favorites");
        assert_eq!(routes::PROFILE, "/profile");
        assert_eq!(routes::LOGIN, "/login");
    }

    #[test]
    fn test_route_constants_are_unique() {
        let routes_list = [
            routes::HOME,
            routes::EXPLORE,
            routes::FAVORITES,
            routes::PROFILE,
            routes::LOGIN,
        ];

        for i in 0..routes_list.len() {
            for j in (i + 1)..routes_list.len() {
                assert_ne!(routes_list[i], routes_list[j], "Routes should be unique");
            }
        }
    }

    #[test]
    fn test_route_paths_format() {
        // All routes start with / and only home ends with one
        for route in [
            routes::EXPLORE,
            routes::FAVORITES,
            routes::PROFILE,
            routes::LOGIN,
        ] {
            assert!(route.starts_with('/'));
            assert!(!route.ends_with('/'));
        }
    }

    #[test]
    fn test_all_page_components_exist() {
        let _favorites = Favorites;
        let _profile = Profile;
        let _login = Login;
        let _not_found = NotFound;
    }
}
