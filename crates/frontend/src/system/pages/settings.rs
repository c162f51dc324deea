use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::system::account::{seed_credit_cards, AccountInfo, PasswordChange};
use leptos::prelude::*;
use thaw::*;

/// Профиль пользователя
#[component]
fn AccountCard() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();

    let current = ctx.account.get_untracked();
    let name = RwSignal::new(current.name);
    let email = RwSignal::new(current.email);

    let save = move |_: leptos::ev::MouseEvent| {
        let info = AccountInfo {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
        };
        match info.validate() {
            Ok(()) => {
                ctx.account.set(info);
                notifications.success("Account updated", "Your profile was saved.");
            }
            Err(err) => notifications.error(&err),
        }
    };

    view! {
        <Card>
            <h3 class="card__title">"Account Information"</h3>
            <Flex vertical=true gap=FlexGap::Medium>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label required=true>"Full Name"</Label>
                    <Input value=name />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label required=true>"Email"</Label>
                    <Input value=email input_type=InputType::Email />
                </Flex>
                <div>
                    <Button appearance=ButtonAppearance::Primary on_click=save>
                        {icon("check")}
                        "Save Changes"
                    </Button>
                </div>
            </Flex>
        </Card>
    }
}

#[component]
fn PasswordCard() -> impl IntoView {
    let notifications = use_notifications();

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let change = move |_: leptos::ev::MouseEvent| {
        let request = PasswordChange {
            current_password: current_password.get_untracked(),
            new_password: new_password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        match request.validate() {
            Ok(()) => {
                for field in [current_password, new_password, confirm_password] {
                    field.set(String::new());
                }
                notifications.success("Password changed", "Your password was updated.");
            }
            Err(err) => notifications.error(&err),
        }
    };

    view! {
        <Card>
            <h3 class="card__title">"Change Password"</h3>
            <Flex vertical=true gap=FlexGap::Medium>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Current Password"</Label>
                    <Input value=current_password input_type=InputType::Password />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label required=true>"New Password"</Label>
                    <Input value=new_password input_type=InputType::Password />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label required=true>"Confirm Password"</Label>
                    <Input value=confirm_password input_type=InputType::Password />
                </Flex>
                <div>
                    <Button appearance=ButtonAppearance::Primary on_click=change>
                        "Update Password"
                    </Button>
                </div>
            </Flex>
        </Card>
    }
}

/// Сохранённые карты, только просмотр
#[component]
fn PaymentMethodsCard() -> impl IntoView {
    let cards = seed_credit_cards();

    view! {
        <Card>
            <h3 class="card__title">"Payment Methods"</h3>
            <ul class="card-list">
                {cards
                    .into_iter()
                    .map(|card| {
                        view! {
                            <li class="card-list__item">
                                {icon("credit-card")}
                                <span class="card-list__number">{card.masked()}</span>
                                <span class="card-list__expiry">{format!("Expires {}", card.expiry)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Card>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Settings" subtitle="Manage your account and payment methods" />

            <div class="page__content settings-grid">
                <AccountCard />
                <PasswordCard />
                <PaymentMethodsCard />
            </div>
        </PageFrame>
    }
}
