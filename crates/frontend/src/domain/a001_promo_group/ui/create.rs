use super::form::{PromoGroupForm, PromoGroupFormVm};
use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use chrono::Utc;
use contracts::domain::a001_promo_group::PromoGroupDraft;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::*;

/// Ключ снимка незавершённой формы в `AppGlobalContext::form_states`
const FORM_KEY: &str = "a001_promo_group--create";

#[component]
pub fn PromoGroupCreate() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let initial = ctx
        .get_form_state(FORM_KEY)
        .and_then(|value| serde_json::from_value::<PromoGroupDraft>(value).ok())
        .unwrap_or_default();
    let vm = PromoGroupFormVm::from_draft(&initial);

    // Черновик переживает уход со страницы
    Effect::new(move |_| {
        let draft = vm.to_draft();
        if let Ok(value) = serde_json::to_value(&draft) {
            ctx.set_form_state(FORM_KEY.to_string(), value);
        }
    });

    let submit = move |_: leptos::ev::MouseEvent| match vm.to_draft().validate() {
        Ok(input) => {
            let Some(group) = ctx
                .promo_groups
                .try_update(|store| store.create(input, Utc::now()))
            else {
                return;
            };
            ctx.clear_form_state(FORM_KEY);
            log::info!("promo group '{}' created", group.name);
            notifications.success(
                "Group created",
                format!("\"{}\" was created with {} codes.", group.name, group.promo_codes.len()),
            );
            navigate("/esim-codes", Default::default());
        }
        Err(err) => notifications.error(&err),
    };

    view! {
        <PageFrame page_id="a001_promo_group--create" category=PAGE_CAT_DETAIL>
            <PageHeader title="Create Promo Group" subtitle="Codes are generated immediately after creation" />

            <div class="page__content">
                <Card>
                    <PromoGroupForm vm=vm />
                    <Flex justify=FlexJustify::End gap=FlexGap::Small>
                        <A href="/esim-codes" attr:class="button button--secondary">"Cancel"</A>
                        <Button appearance=ButtonAppearance::Primary on_click=submit>
                            "Create Group"
                        </Button>
                    </Flex>
                </Card>
            </div>
        </PageFrame>
    }
}
