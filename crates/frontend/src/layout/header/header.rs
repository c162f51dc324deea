use contracts::projections::p900_transactions::latest_balance;
use contracts::shared::money::format_usd;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use super::top_up_dialog::TopUpDialog;
use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth, use_auth_config};

/// Верхняя панель: переключатель навигации, баланс, пополнение, меню пользователя
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();
    let (_, set_auth_state) = use_auth();
    let auth_config = StoredValue::new(use_auth_config());

    let top_up_open = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    let balance = Memo::new(move |_| ctx.transactions.with(|txs| latest_balance(txs)));

    let logout = move |_: leptos::ev::MouseEvent| {
        menu_open.set(false);
        // RequireAuth сам перенаправит на /login
        auth_config.with_value(|config| do_logout(config, set_auth_state));
    };

    let initials = move || {
        ctx.account.with(|account| {
            account
                .name
                .split_whitespace()
                .filter_map(|part| part.chars().next())
                .collect::<String>()
        })
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if ctx.left_open.get() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
            </div>

            <div class="top-header__actions">
                <span class="top-header__balance">
                    "Balance: " {move || format_usd(balance.get())}
                </span>

                <Button appearance=ButtonAppearance::Primary on_click=move |_| top_up_open.set(true)>
                    "Top Up"
                </Button>

                <div class="top-header__user">
                    <button class="top-header__user-btn" on:click=move |_| menu_open.update(|open| *open = !*open)>
                        <span class="top-header__avatar">{initials}</span>
                        <span class="top-header__user-name">{move || ctx.account.with(|a| a.name.clone())}</span>
                        {icon("chevron-down")}
                    </button>

                    <Show when=move || menu_open.get()>
                        <div class="top-header__menu">
                            <div class="top-header__menu-label">
                                <p class="top-header__menu-name">{move || ctx.account.with(|a| a.name.clone())}</p>
                                <p class="top-header__menu-email">{move || ctx.account.with(|a| a.email.clone())}</p>
                            </div>
                            <div class="top-header__menu-item">
                                "Balance: " {move || format_usd(balance.get())}
                            </div>
                            <A href="/settings" attr:class="top-header__menu-item" on:click=move |_| menu_open.set(false)>
                                "Settings"
                            </A>
                            <button class="top-header__menu-item" on:click=logout>
                                {icon("log-out")}
                                "Log out"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>

            <Show when=move || top_up_open.get()>
                <TopUpDialog on_close=Callback::new(move |_| top_up_open.set(false)) />
            </Show>
        </header>
    }
}
