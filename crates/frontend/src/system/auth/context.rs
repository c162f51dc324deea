use contracts::shared::config::AuthConfig;
use contracts::shared::error::ConsoleResult;
use contracts::system::auth::{check_credentials, LoginRequest};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub email: Option<String>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(auth: AuthConfig, children: Children) -> impl IntoView {
    // Restore session from localStorage
    let restored = storage::is_authenticated(&auth.storage_key);
    let (auth_state, set_auth_state) = signal(AuthState {
        is_authenticated: restored,
        email: None,
    });
    if restored {
        log::debug!("session restored from localStorage");
    }

    provide_context(StoredValue::new(auth));
    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub fn use_auth_config() -> AuthConfig {
    use_context::<StoredValue<AuthConfig>>()
        .expect("AuthProvider not found in component tree")
        .get_value()
}

/// Helper: Perform login.
///
/// Ответ «сервера» имитируется задержкой `login_delay_ms`.
pub async fn do_login(
    config: AuthConfig,
    request: LoginRequest,
    set_auth_state: WriteSignal<AuthState>,
) -> ConsoleResult<()> {
    TimeoutFuture::new(config.login_delay_ms).await;
    check_credentials(&config, &request)?;

    storage::save_authenticated(&config.storage_key);
    set_auth_state.set(AuthState {
        is_authenticated: true,
        email: Some(request.email.trim().to_string()),
    });
    log::info!("user logged in: {}", request.email.trim());
    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(config: &AuthConfig, set_auth_state: WriteSignal<AuthState>) {
    storage::clear_authenticated(&config.storage_key);
    set_auth_state.set(AuthState::default());
    log::info!("user logged out");
}
