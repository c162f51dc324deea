pub mod state;

use self::state::{create_state, MemberDialog as DialogState};
use super::member_dialog::MemberDialog;
use crate::layout::global_context::use_global_context;
use crate::layout::modal_service::use_modal;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::StatusBadge;
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::import::{read_file_text, reset_file_input, selected_file};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a002_team_member::import::parse_members_csv;
use contracts::domain::a002_team_member::TeamMember;
use contracts::shared::list_view::{derive_view, filter_records, TextFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const SEARCH_FIELDS: &[&str] = &["email", "referral_code", "status"];

/// Вкладка «Members»: поиск, пагинация, добавление/правка/удаление, импорт CSV
#[component]
pub fn TeamMembersTab() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let modal = use_modal();
    let state = create_state(ctx.config().lists.team_members_page_size);

    let view_page = Memo::new(move |_| {
        let s = state.get();
        let filters = [TextFilter::new(SEARCH_FIELDS, s.search_query)];
        ctx.team_members
            .with(|store| derive_view(store.list(), &filters, &s.sort, &s.pagination))
    });
    let dialog = Memo::new(move |_| state.with(|s| s.dialog.clone()));

    let on_search = Callback::new(move |value: String| {
        state.update(|s| {
            s.search_query = value;
            s.pagination.reset();
        });
    });
    let on_sort = Callback::new(move |field: &'static str| state.update(|s| s.sort.toggle(field)));
    let go_to_page = Callback::new(move |page: usize| state.update(|s| s.pagination.go_to(page)));
    let close_dialog = Callback::new(move |_| state.update(|s| s.dialog = None));

    let delete_member = move |member: TeamMember| {
        let id = member.id.clone();
        let email = member.email.clone();
        modal.confirm(
            "Remove team member",
            format!("Remove {} from the team?", member.email),
            Callback::new(move |_| {
                let removed = ctx.team_members.try_update(|store| store.delete(&id)).flatten();
                if removed.is_none() {
                    return;
                }
                let query = state.with_untracked(|s| s.search_query.clone());
                let remaining = ctx.team_members.with_untracked(|store| {
                    filter_records(store.list(), &[TextFilter::new(SEARCH_FIELDS, query)]).len()
                });
                state.update(|s| s.pagination.retreat_if_empty(remaining));
                notifications.success("Team member removed", format!("{} was removed.", email));
            }),
        );
    };

    let on_upload = move |ev: leptos::ev::Event| {
        let Some(file) = selected_file(&ev) else {
            return;
        };
        reset_file_input(&ev);
        let file_name = file.name();
        spawn_local(async move {
            let contents = match read_file_text(file).await {
                Ok(contents) => contents,
                Err(e) => {
                    notifications.failure("Upload failed", e);
                    return;
                }
            };
            match parse_members_csv(&contents) {
                Ok(members) => {
                    let count = members.len();
                    ctx.team_members.update(|store| {
                        for member in members {
                            store.create(member);
                        }
                    });
                    log::info!("imported {} team members from {}", count, file_name);
                    notifications.success(
                        "Members imported",
                        format!("{} members were added from {}.", count, file_name),
                    );
                }
                Err(err) => notifications.error(&err),
            }
        });
    };

    let sort = Signal::derive(move || state.get().sort);

    view! {
        <div class="tab-panel">
            <div class="filter-panel">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                        on_change=on_search
                        placeholder="Search by email, referral code or status..."
                    />
                    <Flex gap=FlexGap::Small>
                        <label class="button button--secondary">
                            {icon("upload")}
                            "Upload CSV"
                            <input type="file" accept=".csv,text/csv" style="display: none;" on:change=on_upload />
                        </label>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| state.update(|s| s.dialog = Some(DialogState::Add))
                        >
                            "Add Member"
                        </Button>
                    </Flex>
                </Flex>
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Email" field="email" sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="Referral Code" field="referral_code" sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="Status" field="status" sort=sort on_sort=on_sort />
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || view_page.get().rows
                            key=|member| (member.id.clone(), member.email.clone(), member.referral_code.clone(), member.status)
                            children=move |member| {
                                let query = move || state.with(|s| s.search_query.clone());
                                let email = member.email.clone();
                                let referral_code = member.referral_code.clone();
                                let for_edit = member.clone();
                                let for_delete = member.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>{move || highlight_matches(&email, &query())}</TableCell>
                                        <TableCell>{move || highlight_matches(&referral_code, &query())}</TableCell>
                                        <TableCell><StatusBadge status=member.status /></TableCell>
                                        <TableCell>
                                            <div class="table__actions">
                                                <button
                                                    class="table__action"
                                                    title="Edit"
                                                    on:click=move |_| state.update(|s| s.dialog = Some(DialogState::Edit(for_edit.clone())))
                                                >
                                                    {icon("edit")}
                                                </button>
                                                <button
                                                    class="table__action table__action--danger"
                                                    title="Delete"
                                                    on:click=move |_| delete_member(for_delete.clone())
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </div>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <Show when=move || view_page.get().rows.is_empty()>
                    <div class="table__empty">"No team members found."</div>
                </Show>
            </div>

            <PaginationControls
                pagination=Signal::derive(move || state.get().pagination)
                total_count=Signal::derive(move || view_page.get().filtered_count)
                on_page_change=go_to_page
            />

            {move || dialog.get().map(|dialog| match dialog {
                DialogState::Add => view! { <MemberDialog on_close=close_dialog /> }.into_any(),
                DialogState::Edit(member) => {
                    view! { <MemberDialog existing=member on_close=close_dialog /> }.into_any()
                }
            })}
        </div>
    }
}
