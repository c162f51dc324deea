/// Утилиты для списков: поле поиска, подсветка совпадений, классы сортировки
use contracts::shared::list_view::SortState;
use leptos::prelude::*;

/// CSS-класс индикатора сортировки
pub fn sort_class(sort: &SortState, field: &str) -> &'static str {
    if sort.is_active(field) {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// Разбивка текста на куски; `true` у совпавших с фильтром (case-insensitive)
pub fn match_segments(text: &str, filter: &str) -> Vec<(String, bool)> {
    let filter = filter.trim();
    let text_lower = text.to_lowercase();
    // Подсвечиваем только когда нижний регистр не меняет длину строки
    if filter.is_empty() || text_lower.len() != text.len() {
        return vec![(text.to_string(), false)];
    }

    let filter_lower = filter.to_lowercase();
    let mut parts = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if start > last_pos {
            parts.push((text[last_pos..start].to_string(), false));
        }
        parts.push((text[start..end].to_string(), true));
        last_pos = end;
    }

    if last_pos < text.len() {
        parts.push((text[last_pos..].to_string(), false));
    }
    parts
}

/// Подсветка совпадений в тексте.
///
/// В строках таблиц вызывается внутри `move ||`, чтобы подсветка
/// следовала за поисковым запросом.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts = match_segments(text, filter)
        .into_iter()
        .map(|(part, matched)| {
            if matched {
                view! { <mark class="search-highlight">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect::<Vec<_>>();
    view! { <>{parts}</> }.into_any()
}

/// Поле поиска с кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input" class:search-input--active=move || !value.get().trim().is_empty()>
            {crate::shared::icons::icon("search")}
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(parts: &[(String, bool)]) -> Vec<&str> {
        parts
            .iter()
            .filter(|(_, matched)| *matched)
            .map(|(part, _)| part.as_str())
            .collect()
    }

    #[test]
    fn test_match_segments() {
        let parts = match_segments("Test Group test", "TEST");
        assert_eq!(marked(&parts), vec!["Test", "test"]);
        assert_eq!(parts.iter().map(|(p, _)| p.as_str()).collect::<String>(), "Test Group test");
        assert_eq!(match_segments("Test Group", "  "), vec![("Test Group".to_string(), false)]);
    }

    #[test]
    fn test_highlight_follows_query() {
        let query = RwSignal::new(String::new());
        let cell = move || match_segments("Test Group", &query.get());

        assert!(marked(&cell()).is_empty());
        query.set("test".to_string());
        assert_eq!(marked(&cell()), vec!["Test"]);
        query.set("group".to_string());
        assert_eq!(marked(&cell()), vec!["Group"]);
    }
}
