//! Feed card for one article summary

use leptos::prelude::*;

use crate::models::Article;

/// One explore-feed card.
///
/// The read and save actions are deferred features; the buttons render
/// disabled until the corresponding capabilities exist.
#[component]
pub fn ArticleCard(article: Article) -> impl IntoView {
    view! {
        <div class="article-card">
            <div class="article-header">
                <h3 class="article-title">{article.title.clone()}</h3>
                <div class="article-meta">
                    <span class="author">{format!("作者: {}", article.author)}</span>
                    <span class="date">{article.date.clone()}</span>
                    <span class="read-time">{article.read_time.clone()}</span>
                </div>
            </div>
            <p class="article-summary">{article.summary.clone()}</p>
            <div class="article-tags">
                {article
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="article-actions">
                <button class="btn-primary" disabled=true>"阅读全文"</button>
                <button class="btn-secondary" disabled=true>"收藏"</button>
            </div>
        </div>
    }
}
