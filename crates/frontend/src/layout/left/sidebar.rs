//! Sidebar component with the console navigation

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MENU_ITEMS: &[MenuItem] = &[
    MenuItem { href: "/", label: "Dashboard", icon: "bar-chart" },
    MenuItem { href: "/esim-codes", label: "eSIM Code Management", icon: "tag" },
    MenuItem { href: "/usage", label: "Usage", icon: "activity" },
    MenuItem { href: "/team", label: "Team Settings", icon: "users" },
];

/// Корень активен только на `/`, остальные пункты и на вложенных путях
fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        pathname == "/"
    } else {
        pathname.starts_with(href)
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <span class="app-sidebar__title">"eSIM Console"</span>
            </div>
            <nav class="app-sidebar__nav">
                {MENU_ITEMS.iter().map(|item| {
                    let href = item.href;
                    view! {
                        <A href=href attr:class=move || {
                            if is_active(&location.pathname.get(), href) {
                                "app-sidebar__item app-sidebar__item--active"
                            } else {
                                "app-sidebar__item"
                            }
                        }>
                            <div class="app-sidebar__item-content">
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </div>
                        </A>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/usage", "/"));
        assert!(is_active("/esim-codes/abc/view", "/esim-codes"));
        assert!(!is_active("/team", "/esim-codes"));
    }
}
