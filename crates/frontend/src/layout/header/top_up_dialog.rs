use contracts::enums::PaymentMethod;
use contracts::shared::money::format_usd;
use contracts::system::top_up::{TopUpForm, FIXED_AMOUNTS};
use leptos::prelude::*;
use thaw::*;

use crate::layout::notification_service::use_notifications;
use crate::shared::modal::Modal;

/// Диалог пополнения кредитов. Платёж не проводится: форма проверяется,
/// пользователь получает уведомление о запуске пополнения.
#[component]
pub fn TopUpDialog(on_close: Callback<()>) -> impl IntoView {
    let notifications = use_notifications();

    let amount = RwSignal::new(String::new());
    let method = RwSignal::new(String::new());
    let card_number = RwSignal::new(String::new());
    let expiry = RwSignal::new(String::new());
    let cvc = RwSignal::new(String::new());
    let crypto_address = RwSignal::new(String::new());

    let selected_method = move || PaymentMethod::from_code(&method.get());

    let collect_form = move || TopUpForm {
        amount: amount.get_untracked(),
        method: PaymentMethod::from_code(&method.get_untracked()),
        card_number: card_number.get_untracked(),
        expiry: expiry.get_untracked(),
        cvc: cvc.get_untracked(),
        crypto_address: crypto_address.get_untracked(),
    };

    let submit = move |_: leptos::ev::MouseEvent| match collect_form().validate() {
        Ok(request) => {
            log::info!(
                "top-up initiated: {} via {}",
                request.amount_usd,
                request.method.code()
            );
            notifications.success(
                "Top-up initiated",
                format!(
                    "Processing {} top-up via {}",
                    format_usd(request.amount_usd),
                    request.method.display_name()
                ),
            );
            on_close.run(());
        }
        Err(err) => notifications.error(&err),
    };

    view! {
        <Modal title="Top Up Credits" on_close=on_close width="760px">
            <p class="modal__hint">
                "Credits are paid in US$. By default, 1 Credit = $1."
            </p>

            <Flex vertical=true gap=FlexGap::Medium>
                <Label>"Quick Top-Up"</Label>
                <div class="top-up__amounts">
                    {FIXED_AMOUNTS.iter().map(|&credits| {
                        let is_selected = move || {
                            TopUpForm { amount: amount.get(), ..Default::default() }.is_selected(credits)
                        };
                        view! {
                            <button
                                class="top-up__amount"
                                class:top-up__amount--selected=is_selected
                                on:click=move |_| amount.set(credits.to_string())
                            >
                                <span class="top-up__credits">{format!("{} Credits", credits)}</span>
                                <span class="top-up__usd">{format!("${} USD", credits)}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Custom Amount ($10 - $9,999)"</Label>
                    <Input value=amount placeholder="Enter amount" input_type=InputType::Number />
                </Flex>

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Payment Method"</Label>
                    <Select value=method>
                        <option value="">"Select payment method"</option>
                        {PaymentMethod::all().into_iter().map(|m| {
                            view! { <option value=m.code()>{m.display_name()}</option> }
                        }).collect_view()}
                    </Select>
                </Flex>

                <Show when=move || selected_method() == Some(PaymentMethod::Stripe)>
                    <h3 class="top-up__section-title">"Credit Card Details"</h3>
                    <Flex gap=FlexGap::Medium>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Card Number"</Label>
                            <Input value=card_number placeholder="XXXX XXXX XXXX XXXX" />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Expiry Date"</Label>
                            <Input value=expiry placeholder="MM/YY" />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"CVC"</Label>
                            <Input value=cvc placeholder="XXX" />
                        </Flex>
                    </Flex>
                </Show>

                <Show when=move || selected_method() == Some(PaymentMethod::Pelago)>
                    <h3 class="top-up__section-title">"Crypto Payment Details"</h3>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Wallet Address"</Label>
                        <Input value=crypto_address placeholder="Enter your wallet address" />
                    </Flex>
                    <p class="modal__hint">
                        "Please send the exact amount to the address above. Your credits will be added once the transaction is confirmed."
                    </p>
                </Show>

                <Flex justify=FlexJustify::End>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=submit
                        disabled=Signal::derive(move || amount.get().is_empty() || method.get().is_empty())
                    >
                        {move || {
                            let value = amount.get();
                            format!("Top Up ${}", if value.is_empty() { "0".to_string() } else { value })
                        }}
                    </Button>
                </Flex>
            </Flex>
        </Modal>
    }
}
