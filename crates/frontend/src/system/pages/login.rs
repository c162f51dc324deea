use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::layout::notification_service::use_notifications;
use crate::system::auth::context::{do_login, use_auth, use_auth_config};
use crate::system::auth::guard::RedirectIfAuthenticated;
use contracts::system::auth::LoginRequest;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <RedirectIfAuthenticated>
            <LoginForm />
        </RedirectIfAuthenticated>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let config = use_auth_config();
    let notifications = use_notifications();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let config = config.clone();

        set_is_loading.set(true);

        // При успехе RedirectIfAuthenticated сам уводит на главную
        spawn_local(async move {
            if let Err(err) = do_login(config, request, set_auth_state).await {
                notifications.error(&err);
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"eSIM Top-Up Console"</h1>
                <h2>"Sign in to your account"</h2>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="admin@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <A href="/forgot-password">"Forgot your password?"</A>
                </div>
            </div>
        </div>
    }
}
