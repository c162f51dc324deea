use crate::layout::global_context::AppGlobalContext;
use crate::layout::modal_service::{ConfirmDialogHost, ModalService};
use crate::layout::notification_service::{NotificationHost, NotificationService};
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use crate::system::auth::storage;
use contracts::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config(storage::get_config_override().as_deref());
    let auth = config.auth.clone();

    provide_context(NotificationService::new(config.notifications.ttl_ms));

    // Provide ModalService for centralized confirmation dialogs
    provide_context(ModalService::new());

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(config));

    view! {
        <AuthProvider auth=auth>
            <AppRoutes />
            <NotificationHost />
            <ConfirmDialogHost />
        </AuthProvider>
    }
}
