use contracts::shared::status::StatusDisplay;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge badge--primary",
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        _ => "badge badge--neutral",
    };

    view! {
        <span class=variant_class>
            {children()}
        </span>
    }
}

/// Бейдж статуса: подпись и цвет берутся из `StatusDisplay`
#[component]
pub fn StatusBadge<S>(status: S) -> impl IntoView
where
    S: StatusDisplay + Send + Sync + 'static,
{
    view! {
        <span class=status.badge_class()>{status.label()}</span>
    }
}
