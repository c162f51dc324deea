use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::PaginationControls;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use contracts::projections::p900_transactions::TransactionDto;
use contracts::shared::list_view::Pagination;
use contracts::shared::money::{format_signed_usd, format_usd};
use leptos::prelude::*;
use thaw::*;

const EXPORT_FILE: &str = "transactions.csv";

fn amount_class(row: &TransactionDto) -> &'static str {
    if row.kind.is_top_up() {
        "amount amount--positive"
    } else {
        "amount amount--negative"
    }
}

/// История операций по счёту с выгрузкой в CSV
#[component]
pub fn TransactionsTable() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let pagination = RwSignal::new(Pagination::new(ctx.config().lists.transactions_page_size));

    let total = Memo::new(move |_| ctx.transactions.with(|rows| rows.len()));
    let rows = Memo::new(move |_| {
        let p = pagination.get();
        ctx.transactions.with(|rows| p.slice(rows).to_vec())
    });

    let export = move |_: leptos::ev::MouseEvent| {
        let result = ctx
            .transactions
            .with_untracked(|rows| download_csv(rows, EXPORT_FILE));
        if let Err(e) = result {
            log::error!("transactions export failed: {}", e);
            notifications.failure("Export failed", e);
        }
    };

    view! {
        <Card>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="section__title">"Transaction History"</h2>
                <Button on_click=export>
                    {icon("download")}
                    "Download CSV"
                </Button>
            </Flex>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Transaction ID"</TableHeaderCell>
                            <TableHeaderCell>"Amount"</TableHeaderCell>
                            <TableHeaderCell>"Balance"</TableHeaderCell>
                            <TableHeaderCell>"Date & Time"</TableHeaderCell>
                            <TableHeaderCell>"Type"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || rows.get()
                            key=|row| row.id.clone()
                            children=move |row| {
                                let id = row.id.clone();
                                let class = amount_class(&row);
                                let amount = format_signed_usd(row.amount);
                                let balance = format_usd(row.balance);
                                let time = row.time_label();
                                let kind = row.kind.display_name();
                                view! {
                                    <TableRow>
                                        <TableCell><span class="code">{id}</span></TableCell>
                                        <TableCell>
                                            <span class=class>{amount}</span>
                                        </TableCell>
                                        <TableCell>{balance}</TableCell>
                                        <TableCell>{time}</TableCell>
                                        <TableCell>{kind}</TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>

            <PaginationControls
                pagination=pagination
                total_count=total
                on_page_change=Callback::new(move |page: usize| pagination.update(|p| p.go_to(page)))
            />
        </Card>
    }
}
