//! Behavioral tests for navigation and routing

use crate::components::header::{is_exact_active, is_explore_active};
use crate::pages::NotFound;
use crate::router::routes;

// ============================================================================
// ROUTE CONSTANT BEHAVIORS
// ============================================================================

#[test]
fn given_route_constants_when_checking_home_then_is_root() {
    assert_eq!(routes::HOME, "/");
}

#[test]
fn given_route_constants_when_checked_then_all_unique() {
    let all = [
        routes::HOME,
        routes::EXPLORE,
        routes::FAVORITES,
        routes::PROFILE,
        routes::LOGIN,
    ];

    let unique: std::collections::HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), all.len(), "All routes should be unique");
}

#[test]
fn given_route_constants_except_home_when_checked_then_no_trailing_slash() {
    for route in [
        routes::EXPLORE,
        routes::FAVORITES,
        routes::PROFILE,
        routes::LOGIN,
    ] {
        assert!(route.starts_with('/'), "{route} should start with /");
        assert!(!route.ends_with('/'), "{route} should not end with /");
    }
}

// ============================================================================
// ACTIVE-LINK BEHAVIORS
// ============================================================================

#[test]
fn given_root_path_when_highlighting_then_only_explore_is_active() {
    assert!(is_explore_active("/"));
    assert!(!is_exact_active("/", routes::FAVORITES));
    assert!(!is_exact_active("/", routes::PROFILE));
}

#[test]
fn given_explore_path_when_highlighting_then_only_explore_is_active() {
    assert!(is_explore_active("/explore"));
    assert!(!is_exact_active("/explore", routes::FAVORITES));
    assert!(!is_exact_active("/explore", routes::PROFILE));
}

#[test]
fn given_favorites_path_when_highlighting_then_only_favorites_is_active() {
    assert!(!is_explore_active("/favorites"));
    assert!(is_exact_active("/favorites", routes::FAVORITES));
    assert!(!is_exact_active("/favorites", routes::PROFILE));
}

#[test]
fn given_profile_path_when_highlighting_then_only_profile_is_active() {
    assert!(!is_explore_active("/profile"));
    assert!(!is_exact_active("/profile", routes::FAVORITES));
    assert!(is_exact_active("/profile", routes::PROFILE));
}

#[test]
fn given_login_path_when_highlighting_then_no_nav_link_is_active() {
    assert!(!is_explore_active("/login"));
    assert!(!is_exact_active("/login", routes::FAVORITES));
    assert!(!is_exact_active("/login", routes::PROFILE));
}

// ============================================================================
// FALLBACK BEHAVIORS
// ============================================================================

#[test]
fn given_unknown_path_when_highlighting_then_nothing_is_active() {
    assert!(!is_explore_active("/does-not-exist"));
    assert!(!is_exact_active("/does-not-exist", routes::FAVORITES));
    assert!(!is_exact_active("/does-not-exist", routes::PROFILE));
}

#[test]
fn given_unknown_path_when_routing_then_fallback_view_is_defined() {
    // The router's fallback renders this component for every unknown path
    let _fallback = NotFound;
}
