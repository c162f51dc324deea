use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::use_notifications;
use contracts::domain::a003_team_usage::{usage_label, usage_percent, TeamLimits, TeamUsage};
use contracts::shared::money::{format_usd, is_money_input, parse_amount, plain_amount};
use leptos::prelude::*;
use thaw::*;

/// Индикатор заполнения лимита
#[component]
fn UsageBar(
    #[prop(into)]
    label: String,
    #[prop(into)]
    used: Signal<f64>,
    #[prop(into)]
    max: Signal<f64>,
    unit: &'static str,
) -> impl IntoView {
    let percent = move || usage_percent(used.get(), max.get());
    let bar_class = move || {
        let p = percent();
        if p >= 90.0 {
            "usage-bar__fill usage-bar__fill--danger"
        } else if p >= 70.0 {
            "usage-bar__fill usage-bar__fill--warning"
        } else {
            "usage-bar__fill"
        }
    };

    view! {
        <div class="usage-bar">
            <div class="usage-bar__header">
                <span class="usage-bar__label">{label}</span>
                <span class="usage-bar__value">
                    {move || usage_label(used.get(), max.get(), unit)}
                </span>
            </div>
            <div class="usage-bar__track">
                <div class=bar_class style=move || format!("width: {:.1}%;", percent())></div>
            </div>
        </div>
    }
}

fn number_field(value: f64) -> RwSignal<String> {
    RwSignal::new(value.to_string())
}

/// Вкладка «Usage & Limits»: заполнение лимитов и их настройка
#[component]
pub fn UsageLimitsTab() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();

    let usage = Memo::new(move |_| ctx.team_usage.with(|store| store.usage()));
    let limits = Memo::new(move |_| ctx.team_usage.with(|store| store.limits()));

    let current = limits.get_untracked();
    let max_data_gb = number_field(current.max_data_gb);
    let max_credits = number_field(current.max_credits);
    let member_data = number_field(current.default_member_data_limit_gb);
    let member_credits = number_field(current.default_member_credit_limit);
    let max_credit_per_user = RwSignal::new(plain_amount(current.max_credit_per_user));

    let reported = usage.get_untracked();
    let data_used = number_field(reported.total_data_used_gb);
    let credits_used = number_field(reported.total_credits_used);

    let save_limits = move |_: leptos::ev::MouseEvent| {
        let limits = TeamLimits {
            max_data_gb: parse_amount(&max_data_gb.get_untracked()),
            max_credits: parse_amount(&max_credits.get_untracked()),
            default_member_data_limit_gb: parse_amount(&member_data.get_untracked()),
            default_member_credit_limit: parse_amount(&member_credits.get_untracked()),
            max_credit_per_user: parse_amount(&max_credit_per_user.get_untracked()),
        };
        ctx.team_usage.update(|store| store.update_limits(limits));
        notifications.success(
            "Limits saved",
            format!(
                "Per-user request limit is now {}.",
                format_usd(limits.max_credit_per_user)
            ),
        );
    };

    let save_usage = move |_: leptos::ev::MouseEvent| {
        let usage = TeamUsage {
            total_data_used_gb: parse_amount(&data_used.get_untracked()),
            total_credits_used: parse_amount(&credits_used.get_untracked()),
        };
        ctx.team_usage.update(|store| store.update_usage(usage));
        notifications.success("Usage saved", "Reported team usage was updated.");
    };

    view! {
        <div class="tab-panel">
            <Card>
                <h2 class="section__title">"Current Usage"</h2>
                <Flex vertical=true gap=FlexGap::Medium>
                    <UsageBar
                        label="Data"
                        used=Signal::derive(move || usage.get().total_data_used_gb)
                        max=Signal::derive(move || limits.get().max_data_gb)
                        unit="GB"
                    />
                    <UsageBar
                        label="Credits"
                        used=Signal::derive(move || usage.get().total_credits_used)
                        max=Signal::derive(move || limits.get().max_credits)
                        unit="credits"
                    />
                </Flex>
            </Card>

            <Card>
                <h2 class="section__title">"Team Limits"</h2>
                <div class="form-grid">
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Max data (GB)"</Label>
                        <Input value=max_data_gb input_type=InputType::Number />
                    </Flex>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Max credits"</Label>
                        <Input value=max_credits input_type=InputType::Number />
                    </Flex>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Default member data limit (GB)"</Label>
                        <Input value=member_data input_type=InputType::Number />
                    </Flex>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Default member credit limit"</Label>
                        <Input value=member_credits input_type=InputType::Number />
                    </Flex>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Max request value per user (USD)"</Label>
                        <input
                            type="text"
                            class="form__input"
                            inputmode="decimal"
                            prop:value=move || max_credit_per_user.get()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                if is_money_input(&value) {
                                    max_credit_per_user.set(value);
                                } else {
                                    // Отклонённый ввод: вернуть прежнее значение в поле
                                    max_credit_per_user.notify();
                                }
                            }
                        />
                    </Flex>
                </div>
                <Flex justify=FlexJustify::End>
                    <Button appearance=ButtonAppearance::Primary on_click=save_limits>
                        "Save Limits"
                    </Button>
                </Flex>
            </Card>

            <Card>
                <h2 class="section__title">"Reported Usage"</h2>
                <div class="form-grid">
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Data used (GB)"</Label>
                        <Input value=data_used input_type=InputType::Number />
                    </Flex>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Credits used"</Label>
                        <Input value=credits_used input_type=InputType::Number />
                    </Flex>
                </div>
                <Flex justify=FlexJustify::End>
                    <Button on_click=save_usage>"Save Usage"</Button>
                </Flex>
            </Card>
        </div>
    }
}
