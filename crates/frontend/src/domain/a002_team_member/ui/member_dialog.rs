use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::use_notifications;
use crate::shared::modal::Modal;
use contracts::domain::a002_team_member::{NewTeamMember, TeamMember, TeamMemberStatus};
use contracts::shared::error::{ConsoleError, ConsoleResult};
use contracts::shared::status::StatusDisplay;
use leptos::prelude::*;
use thaw::*;

/// Добавление участника (`existing = None`) или правка существующего
#[component]
pub fn MemberDialog(
    #[prop(optional)]
    existing: Option<TeamMember>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();

    let email = RwSignal::new(existing.as_ref().map(|m| m.email.clone()).unwrap_or_default());
    let referral_code = RwSignal::new(
        existing
            .as_ref()
            .map(|m| m.referral_code.clone())
            .unwrap_or_default(),
    );
    let status = RwSignal::new(
        existing
            .as_ref()
            .map(|m| m.status)
            .unwrap_or(TeamMemberStatus::Pending)
            .label()
            .to_string(),
    );
    let title = if existing.is_some() { "Edit Team Member" } else { "Add Team Member" };
    let existing = StoredValue::new(existing);

    let save = move |_: leptos::ev::MouseEvent| {
        let input = NewTeamMember {
            email: email.get_untracked(),
            referral_code: referral_code.get_untracked(),
            status: TeamMemberStatus::from_code(&status.get_untracked()),
        };

        let result: ConsoleResult<String> = match existing.get_value() {
            None => ctx
                .team_members
                .try_update(|store| store.create_unique(input))
                .unwrap_or_else(|| Err(ConsoleError::conflict("The member list is unavailable.")))
                .map(|member| format!("{} was added.", member.email)),
            Some(member) => input.validate().and_then(|valid| {
                let updated = TeamMember {
                    id: member.id,
                    email: valid.email,
                    referral_code: valid.referral_code,
                    status: valid.status.unwrap_or(member.status),
                };
                let message = format!("{} was updated.", updated.email);
                ctx.team_members
                    .try_update(|store| store.update(updated))
                    .unwrap_or(Ok(()))
                    .map(|_| message)
            }),
        };

        match result {
            Ok(message) => {
                notifications.success("Team member saved", message);
                on_close.run(());
            }
            Err(err) => notifications.error(&err),
        }
    };

    view! {
        <Modal title=title on_close=on_close>
            <Flex vertical=true gap=FlexGap::Medium>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label required=true>"Email"</Label>
                    <Input value=email placeholder="member@example.com" input_type=InputType::Email />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label required=true>"Referral Code"</Label>
                    <Input value=referral_code placeholder="REF-0001" />
                </Flex>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Status"</Label>
                    <Select value=status>
                        {TeamMemberStatus::all()
                            .into_iter()
                            .map(|s| view! { <option value=s.label()>{s.label()}</option> })
                            .collect_view()}
                    </Select>
                </Flex>
                <Flex justify=FlexJustify::End gap=FlexGap::Small>
                    <Button on_click=move |_| on_close.run(())>"Cancel"</Button>
                    <Button appearance=ButtonAppearance::Primary on_click=save>"Save"</Button>
                </Flex>
            </Flex>
        </Modal>
    }
}
