//! Компонент сортируемой ячейки заголовка таблицы
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Quantity"
//!     field="quantity"
//!     sort=Signal::derive(move || state.with(|s| s.sort))
//!     on_sort=Callback::new(move |field| state.update(|s| s.sort.toggle(field)))
//! />
//! ```

use crate::shared::list_utils::sort_class;
use contracts::shared::list_view::SortState;
use leptos::prelude::*;
use thaw::*;

/// Заголовок колонки с индикатором сортировки (▲ ▼ ⇅)
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    field: &'static str,

    /// Текущая сортировка списка
    #[prop(into)]
    sort: Signal<SortState>,

    /// Callback при клике на заголовок
    on_sort: Callback<&'static str>,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(field)
            >
                {label}
                <span class=move || sort_class(&sort.get(), field)>
                    {move || sort.get().indicator(field)}
                </span>
            </div>
        </TableHeaderCell>
    }
}
