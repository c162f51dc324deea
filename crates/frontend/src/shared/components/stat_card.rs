use crate::shared::icons::icon;
use leptos::prelude::*;

/// Изменение метрики относительно прошлого периода
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trend {
    pub percent: u32,
    pub positive: bool,
}

impl Trend {
    fn label(&self) -> String {
        let arrow = if self.positive { "\u{2191}" } else { "\u{2193}" };
        format!("{}{}%", arrow, self.percent)
    }

    fn class(&self) -> &'static str {
        if self.positive {
            "stat-card__change stat-card__change--up"
        } else {
            "stat-card__change stat-card__change--down"
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Уже отформатированное значение
    #[prop(into)]
    value: Signal<String>,
    #[prop(into, optional)]
    trend: Signal<Option<Trend>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let change_view = move || {
        trend.get().map(|t| {
            view! { <span class=t.class()>{t.label()}</span> }
        })
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get()}
                    {change_view}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_label() {
        let up = Trend { percent: 8, positive: true };
        assert_eq!(up.label(), "\u{2191}8%");
        let down = Trend { percent: 5, positive: false };
        assert_eq!(down.label(), "\u{2193}5%");
        assert!(down.class().ends_with("--down"));
    }
}
