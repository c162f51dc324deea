use crate::domain::a002_team_member::ui::TeamMembersTab;
use crate::domain::a003_team_usage::ui::{TeamUsageTab, UsageLimitsTab};
use crate::domain::a004_email_controls::ui::EmailControlsTab;
use crate::shared::components::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum TeamTab {
    Members,
    EmailControls,
    Limits,
    Usage,
}

impl TeamTab {
    fn all() -> [TeamTab; 4] {
        [Self::Members, Self::EmailControls, Self::Limits, Self::Usage]
    }

    fn value(self) -> &'static str {
        match self {
            Self::Members => "members",
            Self::EmailControls => "email-controls",
            Self::Limits => "limits",
            Self::Usage => "usage",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Members => "Members",
            Self::EmailControls => "Email Controls",
            Self::Limits => "Usage & Limits",
            Self::Usage => "Team Usage",
        }
    }

    fn from_value(value: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|t| t.value() == value)
            .unwrap_or(Self::Members)
    }
}

/// Настройки команды: участники, ограничения email, лимиты и расход.
#[component]
pub fn TeamSettingsPage() -> impl IntoView {
    let selected_tab_value = RwSignal::new(TeamTab::Members.value().to_string());
    let active_tab = Memo::new(move |_| TeamTab::from_value(&selected_tab_value.get()));

    view! {
        <PageFrame page_id="sys_team_settings--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Team Settings" subtitle="Members, email restrictions and spending limits" />

            <div class="page__content">
                <TabList selected_value=selected_tab_value>
                    {TeamTab::all()
                        .into_iter()
                        .map(|tab| view! { <Tab value=tab.value()>{tab.label()}</Tab> })
                        .collect_view()}
                </TabList>

                <div class="tab-content">
                    {move || match active_tab.get() {
                        TeamTab::Members => view! { <TeamMembersTab /> }.into_any(),
                        TeamTab::EmailControls => view! { <EmailControlsTab /> }.into_any(),
                        TeamTab::Limits => view! { <UsageLimitsTab /> }.into_any(),
                        TeamTab::Usage => view! { <TeamUsageTab /> }.into_any(),
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_values() {
        for tab in TeamTab::all() {
            assert_eq!(TeamTab::from_value(tab.value()), tab);
        }
        assert_eq!(TeamTab::from_value("unknown"), TeamTab::Members);
    }
}
