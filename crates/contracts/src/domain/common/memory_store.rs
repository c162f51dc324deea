use super::AggregateId;

/// Запись, которую можно хранить в [`MemoryStore`]
pub trait Entity: Clone {
    type Id: AggregateId;

    fn id(&self) -> &Self::Id;
}

/// Хранилище записей в памяти.
///
/// Порядок вставки сохраняется; поиск линейный, чего для наборов консоли
/// (сотни записей) достаточно. Отсутствие записи возвращается как `None`,
/// решение о реакции принимает вызывающий код.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    items: Vec<T>,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> MemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Все записи в порядке вставки
    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn get_by_id(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    /// Полная замена записи с тем же ID. Возвращает `false`, если записи нет.
    pub fn replace(&mut self, item: T) -> bool {
        let id = item.id().clone();
        match self.get_mut(&id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: String,
        text: String,
    }

    impl Entity for Note {
        type Id = String;

        fn id(&self) -> &String {
            &self.id
        }
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut store = MemoryStore::new();
        store.insert(note("b", "second"));
        store.insert(note("a", "first"));
        let ids: Vec<&str> = store.list().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_replace_and_remove() {
        let mut store = MemoryStore::from_items(vec![note("a", "old")]);
        assert!(store.replace(note("a", "new")));
        assert_eq!(store.get_by_id(&"a".to_string()).map(|n| n.text.as_str()), Some("new"));
        assert!(!store.replace(note("zzz", "missing")));

        assert!(store.remove(&"a".to_string()).is_some());
        assert!(store.get_by_id(&"a".to_string()).is_none());
        assert!(store.remove(&"a".to_string()).is_none());
        assert!(store.is_empty());
    }
}
