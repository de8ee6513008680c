//! Backend-facing surface of the application
//!
//! Exactly one real collaborator exists (the greeting endpoint); everything
//! else is served by in-process placeholders behind the same contracts a
//! real backend client would implement.

pub mod auth;
pub mod greeting;
pub mod provider;

pub use auth::{LOGIN_DELAY_MS, authenticate};
pub use greeting::{GREETING_FALLBACK, HELLO_ENDPOINT, fetch_greeting, greeting_or_fallback};
pub use provider::{ArticleProvider, FEED_DELAY_MS, MockArticleProvider};
