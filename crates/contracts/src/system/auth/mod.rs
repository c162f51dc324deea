use serde::{Deserialize, Serialize};

use crate::shared::config::AuthConfig;
use crate::shared::error::{ConsoleError, ConsoleResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Проверка пары email/пароль против демо-учётной записи
pub fn check_credentials(config: &AuthConfig, request: &LoginRequest) -> ConsoleResult<()> {
    if request.email.trim() == config.demo_email && request.password == config.demo_password {
        Ok(())
    } else {
        log::warn!("login rejected for '{}'", request.email.trim());
        Err(ConsoleError::InvalidCredentials)
    }
}

/// Запрос сброса пароля: нужен только email. Возвращает адрес для уведомления.
pub fn validate_reset_request(request: &ForgotPasswordRequest) -> ConsoleResult<String> {
    let email = request.email.trim();
    if email.is_empty() {
        return Err(ConsoleError::validation("Please enter your email address."));
    }
    Ok(email.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::ConsoleConfig;

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_demo_credentials() {
        let config = ConsoleConfig::default().auth;
        assert!(check_credentials(&config, &login("user@example.com", "password")).is_ok());
        assert!(check_credentials(&config, &login(" user@example.com ", "password")).is_ok());
        assert_eq!(
            check_credentials(&config, &login("user@example.com", "wrong")),
            Err(ConsoleError::InvalidCredentials)
        );
    }

    #[test]
    fn test_reset_requires_email() {
        let empty = ForgotPasswordRequest { email: "  ".into() };
        assert!(validate_reset_request(&empty).is_err());
        let ok = ForgotPasswordRequest { email: "a@b.com".into() };
        assert_eq!(validate_reset_request(&ok), Ok("a@b.com".to_string()));
    }
}
