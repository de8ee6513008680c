//! Pluggable article source for the explore feed
//!
//! Pages depend on [`ArticleProvider`] only, so the in-process mock and a
//! real backend client are interchangeable implementations of one contract.

use futures::FutureExt;
use futures::future::{LocalBoxFuture, ready};

use crate::error::{ApiError, ApiResult};
use crate::models::Article;
use crate::models::mock::mock_articles;
use crate::utils::simulated_delay;

/// Simulated latency before the mock feed resolves.
pub const FEED_DELAY_MS: u32 = 1_000;

/// Source of explore-feed articles.
pub trait ArticleProvider {
    /// First page of the feed.
    fn fetch_articles(&self) -> LocalBoxFuture<'static, ApiResult<Vec<Article>>>;

    /// Entries following the first `offset` already shown.
    ///
    /// # Errors
    /// `NotImplemented` until a paginated backend exists.
    fn fetch_more(&self, offset: usize) -> LocalBoxFuture<'static, ApiResult<Vec<Article>>>;
}

/// In-process provider serving the hard-coded feed after a fixed delay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MockArticleProvider;

impl ArticleProvider for MockArticleProvider {
    fn fetch_articles(&self) -> LocalBoxFuture<'static, ApiResult<Vec<Article>>> {
        async move {
            simulated_delay(FEED_DELAY_MS).await;
            Ok(mock_articles())
        }
        .boxed_local()
    }

    fn fetch_more(&self, _offset: usize) -> LocalBoxFuture<'static, ApiResult<Vec<Article>>> {
        ready(Err(ApiError::NotImplemented("feed pagination"))).boxed_local()
    }
}
