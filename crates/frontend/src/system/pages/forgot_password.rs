use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::layout::notification_service::use_notifications;
use crate::system::auth::guard::RedirectIfAuthenticated;
use contracts::system::auth::{validate_reset_request, ForgotPasswordRequest};

/// Запрос на сброс пароля. Письмо не отправляется, только уведомление.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let notifications = use_notifications();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = ForgotPasswordRequest {
            email: email.get_untracked(),
        };
        match validate_reset_request(&request) {
            Ok(address) => {
                log::info!("password reset requested for {}", address);
                notifications.success(
                    "Check your inbox",
                    format!("Password reset instructions were sent to {}.", address),
                );
                navigate("/login", Default::default());
            }
            Err(err) => notifications.error(&err),
        }
    };

    view! {
        <RedirectIfAuthenticated>
            <div class="login-container">
                <div class="login-box">
                    <h1>"Reset password"</h1>
                    <h2>"Enter the email linked to your account"</h2>

                    <form on:submit=on_submit.clone()>
                        <div class="form-group">
                            <label for="reset-email">"Email"</label>
                            <input
                                type="email"
                                id="reset-email"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>

                        <button type="submit" class="btn-primary">"Send reset link"</button>
                    </form>

                    <div class="login-info">
                        <A href="/login">"Back to sign in"</A>
                    </div>
                </div>
            </div>
        </RedirectIfAuthenticated>
    }
}
