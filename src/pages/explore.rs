//! Explore page component
//!
//! Landing page of the app. On mount it kicks off two independent,
//! uncoordinated operations: the greeting fetch and the feed population.
//! Neither waits for the other; both discard their results if the page
//! is unmounted before they resolve.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::greeting::{fetch_greeting, greeting_or_fallback};
use crate::api::provider::ArticleProvider;
use crate::components::ArticleCard;
use crate::models::Article;
use crate::utils::{MountGuard, console_error, console_log};

/// Notice shown when the deferred pagination capability is invoked.
pub const LOAD_MORE_NOTICE: &str = "更多论文正在准备中，敬请期待。";

/// Explore page component
#[component]
pub fn Explore<P>(provider: P) -> impl IntoView
where
    P: ArticleProvider + Clone + Send + Sync + 'static,
{
    let (articles, set_articles) = signal(Vec::<Article>::new());
    let (loading, set_loading) = signal(true);
    let (greeting, set_greeting) = signal(String::new());
    let (load_notice, set_load_notice) = signal(Option::<String>::None);

    let guard = MountGuard::mounted();

    // Greeting fetch; failures fall back to the fixed localized message
    {
        let guard = guard.clone();
        Effect::new(move |_| {
            let guard = guard.clone();
            spawn_local(async move {
                let message = greeting_or_fallback(fetch_greeting().await);
                if guard.is_live() {
                    set_greeting.set(message);
                }
            });
        });
    }

    // Feed population through the provider contract
    {
        let provider = provider.clone();
        let guard = guard.clone();
        Effect::new(move |_| {
            let provider = provider.clone();
            let guard = guard.clone();
            spawn_local(async move {
                match provider.fetch_articles().await {
                    Ok(list) => {
                        if guard.is_live() {
                            set_articles.set(list);
                            set_loading.set(false);
                        }
                    }
                    Err(e) => {
                        console_error(&format!("Error loading article feed: {e}"));
                        if guard.is_live() {
                            set_loading.set(false);
                        }
                    }
                }
            });
        });
    }

    let load_more = move |_| {
        let provider = provider.clone();
        let guard = guard.clone();
        spawn_local(async move {
            let offset = articles.get_untracked().len();
            match provider.fetch_more(offset).await {
                Ok(more) => {
                    if guard.is_live() {
                        set_articles.update(|list| list.extend(more));
                    }
                }
                Err(e) => {
                    console_log(&format!("Load more unavailable: {e}"));
                    if guard.is_live() {
                        set_load_notice.set(Some(LOAD_MORE_NOTICE.to_string()));
                    }
                }
            }
        });
    };

    view! {
        <div class="explore-container">
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="loading">
                        <div class="loading-spinner"></div>
                        <p>"正在加载更多论文..."</p>
                    </div>
                }
            >
                <div class="explore-header">
                    <h1>"探索论文"</h1>
                    <h2>{move || greeting.get()}</h2>
                    <p>"发现最新的学术研究成果和前沿技术"</p>
                </div>

                <div class="articles-grid">
                    {move || {
                        articles
                            .get()
                            .into_iter()
                            .map(|article| view! { <ArticleCard article=article /> })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <div class="load-more">
                    <Show when=move || load_notice.get().is_some()>
                        <p class="load-more-notice">
                            {move || load_notice.get().unwrap_or_default()}
                        </p>
                    </Show>
                    // Cloned because Show may call its children again
                    <button class="btn-load-more" on:click=load_more.clone()>
                        "加载更多论文..."
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_more_notice_is_localized() {
        assert!(!LOAD_MORE_NOTICE.is_empty());
    }

    #[test]
    fn test_explore_component_exists() {
        // Compile-time test; rendering needs a browser environment
        let _component = Explore::<crate::api::MockArticleProvider>;
    }
}
