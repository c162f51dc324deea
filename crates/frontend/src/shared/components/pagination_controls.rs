use crate::shared::icons::icon;
use contracts::shared::list_view::{page_window, PageItem, Pagination};
use leptos::prelude::*;

/// "Showing 6-10 of 11"; пустой результат даёт "No records"
fn range_label(pagination: &Pagination, total: usize) -> String {
    let range = pagination.range(total);
    if range.is_empty() {
        "No records".to_string()
    } else {
        format!("Showing {}-{} of {}", range.start + 1, range.end, total)
    }
}

/// PaginationControls component - Previous, окно номеров страниц, Next.
///
/// Страницы нумеруются с 1. Next недоступна на последней странице
/// и когда страниц нет.
#[component]
pub fn PaginationControls(
    /// Текущее состояние пагинации списка
    #[prop(into)]
    pagination: Signal<Pagination>,

    /// Число записей после фильтрации
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let total_pages = move || pagination.get().total_pages(total_count.get());
    let current = move || pagination.get().page;

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || range_label(&pagination.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get();
                    if p.has_previous() {
                        on_page_change.run(p.page - 1);
                    }
                }
                disabled=move || !pagination.get().has_previous()
                title="Previous page"
            >
                {icon("chevron-left")}
                "Previous"
            </button>
            {move || {
                page_window(current(), total_pages())
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(page) => view! {
                            <button
                                class="pagination-btn pagination-btn--page"
                                class:pagination-btn--active=move || current() == page
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                        .into_any(),
                        PageItem::Ellipsis => view! {
                            <span class="pagination-ellipsis">"…"</span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = pagination.get();
                    if p.has_next(total_count.get()) {
                        on_page_change.run(p.page + 1);
                    }
                }
                disabled=move || !pagination.get().has_next(total_count.get())
                title="Next page"
            >
                "Next"
                {icon("chevron-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_label() {
        let mut p = Pagination::new(5);
        assert_eq!(range_label(&p, 11), "Showing 1-5 of 11");
        p.go_to(3);
        assert_eq!(range_label(&p, 11), "Showing 11-11 of 11");
        assert_eq!(range_label(&Pagination::new(5), 0), "No records");
    }
}
