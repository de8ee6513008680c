//! Login page component
//!
//! Two-field form driving the placeholder authentication round-trip.
//! Re-submits while a round-trip is pending are ignored, so login and the
//! redirect to the feed happen exactly once per submission.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::api::auth::authenticate;
use crate::router::routes;
use crate::utils::{MountGuard, console_error};

/// Login page component
#[component]
pub fn Login(on_login: Callback<()>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let navigate = use_navigate();
    let guard = MountGuard::mounted();

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // One round-trip at a time; repeated submits while loading are no-ops
        if is_loading.get_untracked() {
            return;
        }
        set_is_loading.set(true);

        let navigate = navigate.clone();
        let guard = guard.clone();
        spawn_local(async move {
            match authenticate(&email.get_untracked(), &password.get_untracked()).await {
                Ok(()) => {
                    if !guard.is_live() {
                        return;
                    }
                    set_is_loading.set(false);
                    on_login.run(());
                    navigate(routes::HOME, NavigateOptions::default());
                }
                Err(e) => {
                    console_error(&format!("Login failed: {e}"));
                    if guard.is_live() {
                        set_is_loading.set(false);
                    }
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-card">
                <div class="login-header">
                    <h1>"登录"</h1>
                    <p>"欢迎回到 ScholarLink AI"</p>
                </div>

                <form class="login-form" on:submit=handle_submit>
                    <div class="form-group">
                        <label for="email">"邮箱地址"</label>
                        <input
                            id="email"
                            type="email"
                            name="email"
                            placeholder="请输入您的邮箱"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"密码"</label>
                        <input
                            id="password"
                            type="password"
                            name="password"
                            placeholder="请输入您的密码"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required=true
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-login-submit"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "登录中..." } else { "登录" }}
                    </button>
                </form>

                <div class="login-footer">
                    <p>"还没有账户？ " <a href="#" class="link">"立即注册"</a></p>
                    <a href="#" class="link">"忘记密码？"</a>
                </div>
            </div>
        </div>
    }
}
