pub mod view_model;

pub use view_model::PromoGroupFormVm;

use contracts::domain::a001_promo_group::{PromoGroupStatus, RewardKind};
use contracts::shared::status::StatusDisplay;
use leptos::prelude::*;
use thaw::*;

/// Поля формы группы. Статус показывается только при редактировании.
#[component]
pub fn PromoGroupForm(
    vm: PromoGroupFormVm,
    #[prop(optional)]
    show_status: bool,
) -> impl IntoView {
    let amount_label = vm.amount_label();

    view! {
        <div class="form">
            <Flex vertical=true gap=FlexGap::Large>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label required=true>"Group Name"</Label>
                    <Input value=vm.name placeholder="e.g. Summer Campaign" />
                </Flex>

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Description"</Label>
                    <Textarea value=vm.description placeholder="What is this campaign for?" attr:rows=3 />
                </Flex>

                <Flex vertical=true gap=FlexGap::Small>
                    <Label required=true>"Quantity"</Label>
                    <Input value=vm.quantity placeholder="Number of codes" input_type=InputType::Number />
                </Flex>

                <Flex gap=FlexGap::Large>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label required=true>"Start Date"</Label>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || vm.start_date.get()
                            on:input=move |ev| vm.start_date.set(event_target_value(&ev))
                        />
                    </Flex>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label required=true>"End Date"</Label>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || vm.end_date.get()
                            on:input=move |ev| vm.end_date.set(event_target_value(&ev))
                        />
                    </Flex>
                </Flex>

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Reward Type"</Label>
                    <RadioGroup value=vm.reward_kind>
                        {RewardKind::all()
                            .into_iter()
                            .map(|kind| view! { <Radio value=kind.code() label=kind.display_name() /> })
                            .collect_view()}
                    </RadioGroup>
                </Flex>

                <Flex vertical=true gap=FlexGap::Small>
                    <Label required=true>{move || amount_label.get()}</Label>
                    <Input value=vm.reward_amount placeholder="Amount" input_type=InputType::Number />
                </Flex>

                {show_status.then(|| view! {
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Status"</Label>
                        <Select value=vm.status>
                            {PromoGroupStatus::all()
                                .into_iter()
                                .map(|status| view! { <option value=status.label()>{status.label()}</option> })
                                .collect_view()}
                        </Select>
                    </Flex>
                })}
            </Flex>
        </div>
    }
}
