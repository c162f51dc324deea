use crate::layout::global_context::use_global_context;
use crate::layout::modal_service::use_modal;
use crate::layout::notification_service::use_notifications;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a004_email_controls::EmailListKind;
use leptos::prelude::*;
use thaw::*;

/// Белый список доменов
#[component]
fn DomainWhitelist() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let new_domain = RwSignal::new(String::new());

    let domains = Memo::new(move |_| ctx.email_controls.with(|c| c.domains.clone()));

    let add_domain = move |_: leptos::ev::MouseEvent| {
        let input = new_domain.get_untracked();
        match ctx.email_controls.try_update(|c| c.add_domain(&input)).flatten() {
            Some(domain) => {
                new_domain.set(String::new());
                notifications.success("Domain added", format!("{} was whitelisted.", domain));
            }
            None => notifications.info("Nothing added", "The domain is empty or already listed."),
        }
    };

    view! {
        <Card>
            <h2 class="section__title">"Domain Whitelist"</h2>
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <Input value=new_domain placeholder="example.com" />
                <Button appearance=ButtonAppearance::Primary on_click=add_domain>
                    {icon("plus")}
                    "Add Domain"
                </Button>
            </Flex>
            <div class="chip-list">
                <For
                    each=move || domains.get()
                    key=|domain| domain.clone()
                    children=move |domain| {
                        let for_remove = domain.clone();
                        view! {
                            <span class="chip">
                                {domain}
                                <button
                                    class="chip__remove"
                                    title="Remove"
                                    on:click=move |_| {
                                        ctx.email_controls.update(|c| {
                                            c.remove_domain(&for_remove);
                                        });
                                    }
                                >
                                    {icon("x")}
                                </button>
                            </span>
                        }
                    }
                />
            </div>
        </Card>
    }
}

/// Белый или чёрный список адресов: пакетное добавление, поиск, удаление, очистка
#[component]
fn EmailList(kind: EmailListKind) -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let modal = use_modal();
    let bulk_input = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());

    let emails = Memo::new(move |_| {
        let term = search.get();
        ctx.email_controls.with(|c| c.search(kind, &term))
    });
    let total = Memo::new(move |_| ctx.email_controls.with(|c| c.list(kind).len()));

    let bulk_add = move |_: leptos::ev::MouseEvent| {
        let input = bulk_input.get_untracked();
        let added = ctx
            .email_controls
            .try_update(|c| c.bulk_add(kind, &input))
            .unwrap_or_default();
        if added.is_empty() {
            notifications.info("Nothing added", "All addresses were empty or already listed.");
        } else {
            bulk_input.set(String::new());
            notifications.success(
                format!("{} updated", kind.display_name()),
                format!("{} address(es) added.", added.len()),
            );
        }
    };

    let clear = move |_: leptos::ev::MouseEvent| {
        modal.confirm(
            format!("Clear {}", kind.display_name()),
            format!("Remove all addresses from the {}?", kind.display_name().to_lowercase()),
            Callback::new(move |_| {
                ctx.email_controls.update(|c| c.clear(kind));
                notifications.success(format!("{} cleared", kind.display_name()), "All addresses were removed.");
            }),
        );
    };

    view! {
        <Card>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="section__title">
                    {format!("Email {}", kind.display_name())}
                    <span class="section__count">{move || format!(" ({})", total.get())}</span>
                </h2>
                <Button on_click=clear disabled=Signal::derive(move || total.get() == 0)>
                    "Clear All"
                </Button>
            </Flex>
            <Flex vertical=true gap=FlexGap::Small>
                <Textarea
                    value=bulk_input
                    placeholder="Paste addresses separated by commas or new lines"
                    attr:rows=3
                />
                <Flex justify=FlexJustify::End>
                    <Button appearance=ButtonAppearance::Primary on_click=bulk_add>
                        "Add Emails"
                    </Button>
                </Flex>
            </Flex>
            <SearchInput
                value=Signal::derive(move || search.get())
                on_change=Callback::new(move |value: String| search.set(value))
                placeholder="Search addresses..."
            />
            <ul class="email-list">
                <For
                    each=move || emails.get()
                    key=|email| email.clone()
                    children=move |email| {
                        let for_remove = email.clone();
                        let text = email.clone();
                        view! {
                            <li class="email-list__item">
                                {move || highlight_matches(&text, &search.get())}
                                <button
                                    class="table__action table__action--danger"
                                    title="Remove"
                                    on:click=move |_| {
                                        ctx.email_controls.update(|c| {
                                            c.remove_email(kind, &for_remove);
                                        });
                                    }
                                >
                                    {icon("trash")}
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            <Show when=move || emails.get().is_empty()>
                <div class="table__empty">"No addresses."</div>
            </Show>
        </Card>
    }
}

/// Вкладка «Email Controls»
#[component]
pub fn EmailControlsTab() -> impl IntoView {
    view! {
        <div class="tab-panel">
            <DomainWhitelist />
            <div class="tab-panel__columns">
                <EmailList kind=EmailListKind::Whitelist />
                <EmailList kind=EmailListKind::Blacklist />
            </div>
        </div>
    }
}
