//! Производные представления списков: фильтр → сортировка → страница.

pub mod filter;
pub mod pagination;
pub mod sort;

pub use filter::{contains_ci, filter_records, matches_all, Searchable, TextFilter};
pub use pagination::{page_window, PageItem, Pagination, MAX_PAGE_BUTTONS};
pub use sort::{compare_values, sort_records, SortDirection, SortState, SortValue, Sortable};

/// Одна страница производного представления
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub rows: Vec<T>,
    /// Всего записей после фильтрации
    pub filtered_count: usize,
    pub total_pages: usize,
}

/// Отфильтрованный и отсортированный набор целиком (для CSV-выгрузки)
pub fn filtered_sorted<T>(items: &[T], filters: &[TextFilter], sort: &SortState) -> Vec<T>
where
    T: Searchable + Sortable + Clone,
{
    let mut rows = filter_records(items, filters);
    sort_records(&mut rows, sort);
    rows
}

pub fn derive_view<T>(
    items: &[T],
    filters: &[TextFilter],
    sort: &SortState,
    pagination: &Pagination,
) -> ListPage<T>
where
    T: Searchable + Sortable + Clone,
{
    let rows = filtered_sorted(items, filters, sort);
    ListPage {
        filtered_count: rows.len(),
        total_pages: pagination.total_pages(rows.len()),
        rows: pagination.slice(&rows).to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(u32);

    impl Searchable for Item {
        fn field_value(&self, field: &str) -> Option<String> {
            (field == "n").then(|| self.0.to_string())
        }
    }

    impl Sortable for Item {
        fn sort_value(&self, _field: &str) -> SortValue {
            SortValue::Number(self.0 as f64)
        }
    }

    #[test]
    fn test_derive_view() {
        let items: Vec<Item> = (1..=11).map(Item).collect();
        let sort = SortState::none().toggled("n").toggled("n");
        let mut pagination = Pagination::new(5);
        pagination.go_to(3);

        let page = derive_view(&items, &[], &sort, &pagination);
        assert_eq!(page.filtered_count, 11);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.rows, vec![Item(1)]);
    }

    #[test]
    fn test_derive_view_empty_filter_result() {
        let items: Vec<Item> = (1..=11).map(Item).collect();
        let page = derive_view(
            &items,
            &[TextFilter::new(&["n"], "nothing")],
            &SortState::none(),
            &Pagination::new(5),
        );
        assert_eq!(page.filtered_count, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.rows.is_empty());
    }
}
