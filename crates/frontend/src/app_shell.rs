//! Application Shell - корневой layout защищённой части приложения
//!
//! `DashboardLayout` - auth gate + Shell (Header + Sidebar) + `<Outlet />`
//! для вложенных маршрутов.

use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use leptos::prelude::*;
use leptos_router::components::Outlet;

#[component]
pub fn DashboardLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell>
                <Outlet />
            </Shell>
        </RequireAuth>
    }
}
