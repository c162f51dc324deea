use crate::layout::global_context::use_global_context;
use crate::projections::p900_transactions::ui::TransactionsTable;
use crate::shared::components::{PageHeader, StatCard, Trend};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::domain::a002_team_member::TeamMemberStatus;
use contracts::enums::UsagePeriod;
use contracts::projections::p900_transactions::{latest_balance, purchase_stats};
use contracts::shared::money::format_usd;
use leptos::prelude::*;
use thaw::*;

/// Overview Dashboard component
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_global_context();
    let period_code = RwSignal::new(UsagePeriod::default().code().to_string());
    let period = Memo::new(move |_| UsagePeriod::from_code(&period_code.get()).unwrap_or_default());

    let balance = Signal::derive(move || format_usd(ctx.transactions.with(|rows| latest_balance(rows))));
    let purchases = Memo::new(move |_| purchase_stats(period.get()));
    let total_codes = Signal::derive(move || ctx.promo_groups.with(|store| store.total_codes()).to_string());
    let active_members = Signal::derive(move || {
        ctx.team_members
            .with(|store| store.count_by_status(TeamMemberStatus::Active))
            .to_string()
    });

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Dashboard" subtitle="Account balance, purchases and team activity">
                <Select value=period_code>
                    {UsagePeriod::all()
                        .into_iter()
                        .map(|p| view! { <option value=p.code()>{p.display_name()}</option> })
                        .collect_view()}
                </Select>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Account Balance" icon_name="dollar-sign" value=balance />
                    <StatCard
                        label="Purchases"
                        icon_name="credit-card"
                        value=Signal::derive(move || format_usd(purchases.get().total))
                        trend=Signal::derive(move || {
                            let stats = purchases.get();
                            Some(Trend {
                                percent: stats.trend_percent,
                                positive: stats.trend_positive,
                            })
                        })
                        subtitle=Signal::derive(move || Some(period.get().comparison_label().to_string()))
                    />
                    <StatCard label="Total Codes Generated" icon_name="tag" value=total_codes />
                    <StatCard label="Active Team Members" icon_name="users" value=active_members />
                </div>

                <TransactionsTable />
            </div>
        </PageFrame>
    }
}
