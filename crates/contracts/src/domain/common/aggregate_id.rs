use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Идентификатор записи хранилища.
///
/// Строковая форма попадает в маршруты (`/esim-codes/:group_id/view`)
/// и в поля кода `user_id`.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn as_string(&self) -> String;

    /// Разбор из параметра маршрута
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s.trim()).map_err(|e| format!("Invalid id '{}': {}", s, e))
    }
}

// Сид-данные участников используют короткие ключи ("member1")
impl AggregateId for String {
    fn as_string(&self) -> String {
        self.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty id".to_string());
        }
        Ok(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_id() {
        let id = uuid::Uuid::new_v4();
        assert_eq!(uuid::Uuid::from_string(&id.as_string()), Ok(id));
        assert!(uuid::Uuid::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_string_id_trims() {
        assert_eq!(String::from_string(" member1 "), Ok("member1".to_string()));
        assert!(String::from_string("   ").is_err());
    }
}
