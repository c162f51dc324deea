use serde::{Deserialize, Serialize};

/// Максимум кнопок с номерами страниц
pub const MAX_PAGE_BUTTONS: usize = 7;

/// Состояние постраничного вывода. Страницы нумеруются с 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// `ceil(total / page_size)`, 0 для пустого результата
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.max(1))
    }

    /// Диапазон индексов текущей страницы в отфильтрованном наборе
    pub fn range(&self, total: usize) -> std::ops::Range<usize> {
        let start = (self.page.max(1) - 1) * self.page_size;
        let start = start.min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page < self.total_pages(total)
    }

    pub fn previous(&mut self) {
        if self.has_previous() {
            self.page -= 1;
        }
    }

    pub fn next(&mut self, total: usize) {
        if self.has_next(total) {
            self.page += 1;
        }
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Возврат на первую страницу (применение или сброс фильтров)
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// После удаления строки: если текущая страница опустела, шаг назад
    pub fn retreat_if_empty(&mut self, total: usize) {
        if self.page > 1 && self.range(total).is_empty() {
            self.page -= 1;
        }
    }
}

/// Элемент строки кнопок пагинации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Окно номеров страниц: первая и последняя страница всегда видны,
/// соседи текущей вокруг неё, многоточие там, где окно не касается края.
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages <= MAX_PAGE_BUTTONS {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut items = vec![PageItem::Page(1)];
    if current > 3 {
        items.push(PageItem::Ellipsis);
    }

    let mut start = current.saturating_sub(1).max(2);
    let mut end = (current + 1).min(total_pages - 1);
    if current <= 3 {
        end = (total_pages - 1).min(5);
    }
    if current + 3 > total_pages {
        start = total_pages.saturating_sub(4).max(2);
    }
    items.extend((start..=end).map(PageItem::Page));

    if current + 2 < total_pages {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total_pages));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn test_eleven_items_page_size_five() {
        let items: Vec<u32> = (1..=11).collect();
        let mut pagination = Pagination::new(5);
        assert_eq!(pagination.total_pages(items.len()), 3);
        assert!(!pagination.has_previous());

        pagination.next(items.len());
        pagination.next(items.len());
        assert_eq!(pagination.page, 3);
        assert_eq!(pagination.slice(&items), &[11]);
        assert!(!pagination.has_next(items.len()));

        pagination.next(items.len());
        assert_eq!(pagination.page, 3);
    }

    #[test]
    fn test_empty_result_has_no_pages() {
        let mut pagination = Pagination::new(10);
        assert_eq!(pagination.total_pages(0), 0);
        assert!(!pagination.has_next(0));
        assert!(pagination.slice::<u8>(&[]).is_empty());
        pagination.next(0);
        assert_eq!(pagination.page, 1);
    }

    #[test]
    fn test_retreat_after_delete() {
        let mut pagination = Pagination::new(5);
        pagination.go_to(3);
        pagination.retreat_if_empty(10);
        assert_eq!(pagination.page, 2);
        pagination.retreat_if_empty(10);
        assert_eq!(pagination.page, 2);
    }

    #[test]
    fn test_window_middle() {
        assert_eq!(
            page_window(8, 16),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Ellipsis, Page(16)]
        );
    }

    #[test]
    fn test_window_edges() {
        assert_eq!(
            page_window(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_window(10, 10),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_window_small() {
        assert_eq!(page_window(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert!(page_window(1, 0).is_empty());
    }
}
