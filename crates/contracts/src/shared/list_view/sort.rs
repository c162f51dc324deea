use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Сортировка по одной колонке.
///
/// Переключение: нет сортировки → по возрастанию → по убыванию → по возрастанию;
/// клик по другой колонке начинает с возрастания.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: Option<&'static str>,
    pub direction: Option<SortDirection>,
}

impl SortState {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, field: &'static str) {
        let next = match (self.field, self.direction) {
            (Some(current), Some(SortDirection::Ascending)) if current == field => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.field = Some(field);
        self.direction = Some(next);
    }

    pub fn toggled(mut self, field: &'static str) -> Self {
        self.toggle(field);
        self
    }

    pub fn is_active(&self, field: &str) -> bool {
        self.field == Some(field) && self.direction.is_some()
    }

    /// Индикатор для заголовка колонки
    pub fn indicator(&self, field: &str) -> &'static str {
        if !self.is_active(field) {
            return " ⇅";
        }
        match self.direction {
            Some(SortDirection::Descending) => " ▼",
            _ => " ▲",
        }
    }
}

/// Значение колонки для сравнения
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(f64),
}

pub trait Sortable {
    fn sort_value(&self, field: &str) -> SortValue;
}

/// Текст сравнивается без учёта регистра (при равенстве по исходной строке),
/// числа численно. Разнотипные значения: числа раньше текста.
pub fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Text(a), SortValue::Text(b)) => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
        (SortValue::Number(a), SortValue::Number(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
        (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
    }
}

/// Стабильная сортировка по состоянию; без активной колонки порядок не меняется
pub fn sort_records<T: Sortable>(items: &mut [T], state: &SortState) {
    let (Some(field), Some(direction)) = (state.field, state.direction) else {
        return;
    };
    items.sort_by(|a, b| {
        let cmp = compare_values(&a.sort_value(field), &b.sort_value(field));
        match direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Row {
        code: &'static str,
        amount: f64,
    }

    impl Sortable for Row {
        fn sort_value(&self, field: &str) -> SortValue {
            match field {
                "amount" => SortValue::Number(self.amount),
                _ => SortValue::Text(self.code.to_string()),
            }
        }
    }

    #[test]
    fn test_toggle_cycle() {
        let mut state = SortState::none();
        state.toggle("code");
        assert_eq!(state.direction, Some(SortDirection::Ascending));
        state.toggle("code");
        assert_eq!(state.direction, Some(SortDirection::Descending));
        state.toggle("code");
        assert_eq!(state.direction, Some(SortDirection::Ascending));

        state.toggle("amount");
        assert_eq!(state.field, Some("amount"));
        assert_eq!(state.direction, Some(SortDirection::Ascending));
    }

    #[test]
    fn test_indicator() {
        let state = SortState::none().toggled("code");
        assert_eq!(state.indicator("code"), " ▲");
        assert_eq!(state.indicator("amount"), " ⇅");
        assert_eq!(state.toggled("code").indicator("code"), " ▼");
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        let mut rows = vec![
            Row { code: "beta", amount: 1.0 },
            Row { code: "Alpha", amount: 2.0 },
            Row { code: "alpha", amount: 3.0 },
        ];
        sort_records(&mut rows, &SortState::none().toggled("code"));
        let codes: Vec<_> = rows.iter().map(|r| r.code).collect();
        assert_eq!(codes, vec!["Alpha", "alpha", "beta"]);
    }

    #[test]
    fn test_numeric_sort_descending() {
        let mut rows = vec![
            Row { code: "a", amount: 10.0 },
            Row { code: "b", amount: -89.5 },
            Row { code: "c", amount: 500.0 },
        ];
        sort_records(&mut rows, &SortState::none().toggled("amount").toggled("amount"));
        let amounts: Vec<_> = rows.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![500.0, 10.0, -89.5]);
    }

    #[test]
    fn test_no_sort_keeps_order() {
        let mut rows = vec![
            Row { code: "b", amount: 1.0 },
            Row { code: "a", amount: 2.0 },
        ];
        sort_records(&mut rows, &SortState::none());
        assert_eq!(rows[0].code, "b");
    }
}
