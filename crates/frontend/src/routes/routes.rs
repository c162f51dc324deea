use crate::app_shell::DashboardLayout;
use crate::dashboards::OverviewDashboard;
use crate::domain::a001_promo_group::ui::{
    PromoGroupCreate, PromoGroupDetails, PromoGroupEdit, PromoGroupList,
};
use crate::projections::p901_usage_history::ui::UsageHistoryList;
use crate::system::pages::forgot_password::ForgotPasswordPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::settings::SettingsPage;
use crate::system::pages::team_settings::TeamSettingsPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

/// Таблица маршрутов приложения.
///
/// Всё, кроме `/login` и `/forgot-password`, живёт внутри `DashboardLayout`,
/// который сам отправляет неавторизованного пользователя на вход.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/forgot-password") view=ForgotPasswordPage />
                <ParentRoute path=path!("") view=DashboardLayout>
                    <Route path=path!("") view=OverviewDashboard />
                    <Route path=path!("esim-codes") view=PromoGroupList />
                    <Route path=path!("esim-codes/create") view=PromoGroupCreate />
                    <Route path=path!("esim-codes/:group_id/edit") view=PromoGroupEdit />
                    <Route path=path!("esim-codes/:group_id/view") view=PromoGroupDetails />
                    <Route path=path!("usage") view=UsageHistoryList />
                    <Route path=path!("team") view=TeamSettingsPage />
                    <Route path=path!("settings") view=SettingsPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
