use super::form::{PromoGroupForm, PromoGroupFormVm};
use super::group_outcome;
use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_promo_group::PromoGroupDraft;
use contracts::shared::error::ConsoleError;
use leptos::prelude::*;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

/// Редактирование группы: полная замена полей, ID и коды сохраняются
#[component]
pub fn PromoGroupEdit() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let navigate = use_navigate();
    let params = use_params_map();

    let group_id = params.with_untracked(|p| p.get("group_id")).unwrap_or_default();
    let Some(group) = ctx
        .promo_groups
        .with_untracked(|store| store.get_by_str(&group_id).cloned())
    else {
        log::warn!("edit requested for unknown group {}", group_id);
        notifications.error(&ConsoleError::not_found("group", group_id));
        return view! { <Redirect path="/esim-codes" /> }.into_any();
    };

    let vm = PromoGroupFormVm::from_draft(&PromoGroupDraft::from_group(&group));
    let title = format!("Edit {}", group.name);
    let original = StoredValue::new(group);

    let submit = move |_: leptos::ev::MouseEvent| {
        let result = original
            .with_value(|group| group.with_draft(&vm.to_draft()))
            .and_then(|updated| {
                let name = updated.name.clone();
                let id = updated.to_string_id();
                group_outcome(ctx.promo_groups.try_update(|store| store.update(updated)), id)
                    .map(|_| name)
            });
        match result {
            Ok(name) => {
                notifications.success("Group updated", format!("\"{}\" was saved.", name));
                navigate("/esim-codes", Default::default());
            }
            Err(err) => notifications.error(&err),
        }
    };

    view! {
        <PageFrame page_id="a001_promo_group--edit" category=PAGE_CAT_DETAIL>
            <PageHeader title=title subtitle="Changes replace the whole group record" />

            <div class="page__content">
                <Card>
                    <PromoGroupForm vm=vm show_status=true />
                    <Flex justify=FlexJustify::End gap=FlexGap::Small>
                        <A href="/esim-codes" attr:class="button button--secondary">"Cancel"</A>
                        <Button appearance=ButtonAppearance::Primary on_click=submit>
                            "Save Changes"
                        </Button>
                    </Flex>
                </Card>
            </div>
        </PageFrame>
    }
    .into_any()
}
