use thiserror::Error;

/// Ошибки операций консоли.
///
/// Ни одна из них не фатальна: UI показывает уведомление с [`ConsoleError::title`]
/// и текстом ошибки, состояние формы сохраняется.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// Не заполнены обязательные поля или значение некорректно
    #[error("{0}")]
    Validation(String),

    /// Запись с указанным идентификатором отсутствует
    #[error("The requested {entity} was not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Неверная пара email/пароль при входе
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// Операция невозможна в текущем состоянии записи
    #[error("{0}")]
    Conflict(String),
}

impl ConsoleError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Заголовок уведомления
    pub fn title(&self) -> String {
        match self {
            Self::Validation(_) => "Missing Information".to_string(),
            Self::NotFound { entity, .. } => format!("{} Not Found", capitalize(entity)),
            Self::InvalidCredentials => "Login Failed".to_string(),
            Self::Conflict(_) => "Action Not Allowed".to_string(),
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(
            ConsoleError::not_found("group", "42").title(),
            "Group Not Found"
        );
        assert_eq!(ConsoleError::InvalidCredentials.title(), "Login Failed");
        assert_eq!(
            ConsoleError::validation("Please fill in all required fields.").title(),
            "Missing Information"
        );
    }

    #[test]
    fn test_display() {
        let err = ConsoleError::not_found("group", "abc");
        assert_eq!(err.to_string(), "The requested group was not found: abc");
        assert_eq!(
            ConsoleError::InvalidCredentials.to_string(),
            "Invalid email or password."
        );
    }
}
