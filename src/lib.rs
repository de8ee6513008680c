//! Leptos 0.7 CSR frontend for ScholarLink AI paper discovery
//!
//! Client-side rendered single-page application: a navigation header and
//! four routed pages (explore feed, favorites, profile, login) plus a 404
//! fallback. All state is transient and lives in the UI; the only real
//! backend integration is the greeting endpoint on the explore page.
//!
//! ## Module Structure
//! - `app`: Main application component
//! - `router`: Route definitions and the routed outlet
//! - `pages`: Top-level page components
//! - `components`: Reusable UI components (header, feed card)
//! - `models`: View-state data models and the mock feed
//! - `api`: Greeting client, article provider contract, auth placeholder
//! - `state`: Session flag owned by the shell
//! - `error`: Error taxonomy for the API surface
//! - `utils`: Mount-lifetime cancellation, delays, console logging

#![forbid(unsafe_code)]

pub mod api;
pub mod app;
pub mod components;
pub mod error;
pub mod models;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;

#[cfg(test)]
mod tests;
