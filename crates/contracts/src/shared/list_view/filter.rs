/// Запись, текстовые поля которой участвуют в поиске
pub trait Searchable {
    /// Значение поля по имени; `None`, если поле не поддерживается
    fn field_value(&self, field: &str) -> Option<String>;
}

/// Фильтр по подстроке: совпадение хотя бы в одном из полей
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFilter {
    pub fields: &'static [&'static str],
    pub value: String,
}

impl TextFilter {
    pub fn new(fields: &'static [&'static str], value: impl Into<String>) -> Self {
        Self {
            fields,
            value: value.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        if self.is_empty() {
            return true;
        }
        let needle = self.value.trim();
        self.fields.iter().any(|field| {
            item.field_value(field)
                .map(|value| contains_ci(&value, needle))
                .unwrap_or(false)
        })
    }
}

/// Регистронезависимый поиск подстроки
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Фильтры объединяются по И; пустой фильтр пропускает всё
pub fn matches_all<T: Searchable>(item: &T, filters: &[TextFilter]) -> bool {
    filters.iter().all(|filter| filter.matches(item))
}

pub fn filter_records<T: Searchable + Clone>(items: &[T], filters: &[TextFilter]) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_all(*item, filters))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Row {
        name: &'static str,
        email: &'static str,
    }

    impl Searchable for Row {
        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "name" => Some(self.name.to_string()),
                "email" => Some(self.email.to_string()),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "ByBit Team", email: "ops@bybit.com" },
            Row { name: "Team 2", email: "two@example.com" },
            Row { name: "Group 4", email: "four@bybit.com" },
        ]
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let result = filter_records(&rows(), &[TextFilter::new(&["name"], "  ")]);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_case_insensitive_any_field() {
        let result = filter_records(&rows(), &[TextFilter::new(&["name", "email"], "BYBIT")]);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let filters = [
            TextFilter::new(&["name"], "team"),
            TextFilter::new(&["email"], "bybit"),
        ];
        let result = filter_records(&rows(), &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "ByBit Team");
    }

    #[test]
    fn test_no_match() {
        let result = filter_records(&rows(), &[TextFilter::new(&["name"], "zzz")]);
        assert!(result.is_empty());
    }
}
