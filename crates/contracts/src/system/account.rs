//! Настройки учётной записи: профиль, смена пароля, сохранённые карты.

use serde::{Deserialize, Serialize};

use crate::shared::error::{ConsoleError, ConsoleResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub name: String,
    pub email: String,
}

impl Default for AccountInfo {
    fn default() -> Self {
        Self {
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
        }
    }
}

impl AccountInfo {
    pub fn validate(&self) -> ConsoleResult<()> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(ConsoleError::validation("Please fill in all required fields."));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    pub fn validate(&self) -> ConsoleResult<()> {
        if self.new_password.is_empty() || self.confirm_password.is_empty() {
            return Err(ConsoleError::validation("Please enter and confirm the new password."));
        }
        if self.new_password != self.confirm_password {
            return Err(ConsoleError::validation(
                "New password and confirm password do not match.",
            ));
        }
        Ok(())
    }
}

/// Сохранённая банковская карта (только отображение)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: String,
    pub last4: String,
    pub brand: String,
    pub expiry: String,
}

impl CreditCard {
    pub fn masked(&self) -> String {
        format!("{} •••• {}", self.brand, self.last4)
    }
}

pub fn seed_credit_cards() -> Vec<CreditCard> {
    vec![
        CreditCard {
            id: "card1".into(),
            last4: "1234".into(),
            brand: "Visa".into(),
            expiry: "12/26".into(),
        },
        CreditCard {
            id: "card2".into(),
            last4: "5678".into(),
            brand: "Mastercard".into(),
            expiry: "08/25".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(new: &str, confirm: &str) -> PasswordChange {
        PasswordChange {
            current_password: "old".into(),
            new_password: new.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn test_password_change() {
        assert!(change("secret", "secret").validate().is_ok());
        assert_eq!(
            change("secret", "other").validate(),
            Err(ConsoleError::validation(
                "New password and confirm password do not match."
            ))
        );
        assert!(change("", "").validate().is_err());
    }

    #[test]
    fn test_account_info() {
        assert!(AccountInfo::default().validate().is_ok());
        let blank = AccountInfo {
            name: " ".into(),
            ..Default::default()
        };
        assert!(blank.validate().is_err());
        assert_eq!(seed_credit_cards()[0].masked(), "Visa •••• 1234");
    }
}
