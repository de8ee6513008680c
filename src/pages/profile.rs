//! Profile page component
//!
//! Same login gate as Favorites. The card shows a placeholder identity and
//! zeroed counters; editing is a deferred feature.

use leptos::prelude::*;

use crate::router::routes;

/// Profile page component
#[component]
pub fn Profile(logged_in: ReadSignal<bool>) -> impl IntoView {
    view! {
        <div class="profile-container">
            <Show
                when=move || logged_in.get()
                fallback=|| view! {
                    <div class="login-prompt">
                        <h2>"个人资料"</h2>
                        <p>"请先登录以查看和管理您的个人资料"</p>
                        <a href=routes::LOGIN class="btn-login">"立即登录"</a>
                    </div>
                }
            >
                <div class="profile-header">
                    <h1>"个人资料"</h1>
                    <p>"管理您的账户信息和偏好设置"</p>
                </div>

                <div class="profile-content">
                    <div class="profile-card">
                        <div class="profile-avatar">
                            <div class="avatar-placeholder">"👤"</div>
                        </div>
                        <div class="profile-info">
                            <h3>"用户名"</h3>
                            <p>"user@example.com"</p>
                            <div class="profile-stats">
                                <div class="stat">
                                    <span class="stat-number">"0"</span>
                                    <span class="stat-label">"收藏论文"</span>
                                </div>
                                <div class="stat">
                                    <span class="stat-number">"0"</span>
                                    <span class="stat-label">"阅读历史"</span>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="profile-actions">
                        <button class="btn-primary" disabled=true>"编辑资料"</button>
                        <button class="btn-secondary" disabled=true>"修改密码"</button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
