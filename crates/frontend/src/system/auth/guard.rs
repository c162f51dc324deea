use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Пускает к дочерним компонентам только после входа,
/// иначе перенаправляет на страницу входа
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}

/// Обратное правило для страниц входа: авторизованного пользователя
/// отправляет на главную
#[component]
pub fn RedirectIfAuthenticated(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || !auth_state.get().is_authenticated
            fallback=|| view! { <Redirect path="/" /> }
        >
            {children()}
        </Show>
    }
}
