use crate::domain::a001_promo_group::ui::group_outcome;
use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::use_notifications;
use crate::shared::modal::Modal;
use chrono::Utc;
use contracts::domain::a001_promo_group::PromoGroupId;
use contracts::domain::a002_team_member::TeamMemberStatus;
use contracts::domain::common::AggregateId;
use contracts::shared::error::{ConsoleError, ConsoleResult};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_redeem_code::{RedeemCode, RedeemCodeRequest, RedemptionReceipt};
use leptos::prelude::*;
use thaw::*;

/// Погашение кода для выбранного участника команды
#[component]
pub fn RedeemDialog(
    group_id: PromoGroupId,
    #[prop(into)]
    code: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();

    let emails: Vec<String> = ctx.team_members.with_untracked(|store| {
        store
            .list()
            .iter()
            .filter(|m| m.status == TeamMemberStatus::Active)
            .map(|m| m.email.clone())
            .collect()
    });
    let member_email = RwSignal::new(emails.first().cloned().unwrap_or_default());
    let code_for_request = code.clone();

    let redeem = move |_: leptos::ev::MouseEvent| {
        let request = RedeemCodeRequest {
            group_id,
            code: code_for_request.clone(),
            member_email: member_email.get_untracked(),
        };
        if request.member_email.trim().is_empty() {
            notifications.error(&ConsoleError::validation("Please choose a team member."));
            return;
        }

        let outcome: ConsoleResult<RedemptionReceipt> = ctx.team_members.with_untracked(|members| {
            let mut outcome = None;
            ctx.promo_groups.update(|groups| {
                ctx.team_usage.update(|usage| {
                    outcome = Some(RedeemCode::execute(groups, members, usage, &request, Utc::now()));
                });
            });
            group_outcome(outcome, request.group_id.as_string())
        });

        match outcome {
            Ok(receipt) => {
                notifications.success(
                    "Code redeemed",
                    format!("{} was redeemed for {}.", receipt.code, receipt.member_email),
                );
                on_close.run(());
            }
            Err(err) => notifications.error(&err),
        }
    };

    view! {
        <Modal title=format!("{} {}", RedeemCode::display_name(), code) on_close=on_close>
            <Flex vertical=true gap=FlexGap::Medium>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Team member"</Label>
                    <Select value=member_email>
                        {emails
                            .into_iter()
                            .map(|email| {
                                let value = email.clone();
                                view! { <option value=value>{email}</option> }
                            })
                            .collect_view()}
                    </Select>
                </Flex>
                <p class="modal__hint">
                    "The reward is charged against the team limits and the member's request limit."
                </p>
                <Flex justify=FlexJustify::End gap=FlexGap::Small>
                    <Button on_click=move |_| on_close.run(())>"Cancel"</Button>
                    <Button appearance=ButtonAppearance::Primary on_click=redeem>
                        "Redeem"
                    </Button>
                </Flex>
            </Flex>
        </Modal>
    }
}
