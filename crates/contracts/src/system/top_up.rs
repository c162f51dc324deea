//! Пополнение баланса из шапки: фиксированные суммы или своя сумма.

use serde::{Deserialize, Serialize};

use crate::enums::PaymentMethod;
use crate::shared::error::{ConsoleError, ConsoleResult};
use crate::shared::money::parse_amount;

/// Быстрые суммы пополнения (1 кредит = 1 USD)
pub const FIXED_AMOUNTS: [u32; 6] = [50, 100, 300, 500, 1000, 3000];

pub const MIN_CUSTOM_AMOUNT: f64 = 10.0;
pub const MAX_CUSTOM_AMOUNT: f64 = 9999.0;

/// Состояние формы пополнения
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopUpForm {
    /// Выбранная быстрая сумма или введённая вручную
    pub amount: String,
    pub method: Option<PaymentMethod>,
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
    pub crypto_address: String,
}

/// Проверенный запрос на пополнение
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TopUpRequest {
    pub amount_usd: f64,
    pub method: PaymentMethod,
}

impl TopUpForm {
    pub fn select_amount(&mut self, credits: u32) {
        self.amount = credits.to_string();
    }

    pub fn is_selected(&self, credits: u32) -> bool {
        self.amount == credits.to_string()
    }

    pub fn validate(&self) -> ConsoleResult<TopUpRequest> {
        let amount = parse_amount(&self.amount);
        if !(MIN_CUSTOM_AMOUNT..=MAX_CUSTOM_AMOUNT).contains(&amount) {
            return Err(ConsoleError::validation(
                "Please choose an amount between $10 and $9,999.",
            ));
        }
        let method = self.method.ok_or_else(|| {
            ConsoleError::validation("Please select a payment method to continue.")
        })?;
        match method {
            PaymentMethod::Stripe => {
                if [&self.card_number, &self.expiry, &self.cvc]
                    .iter()
                    .any(|field| field.trim().is_empty())
                {
                    return Err(ConsoleError::validation(
                        "Please fill in all credit card information.",
                    ));
                }
            }
            PaymentMethod::Pelago => {
                if self.crypto_address.trim().is_empty() {
                    return Err(ConsoleError::validation("Please enter the crypto address."));
                }
            }
        }
        Ok(TopUpRequest {
            amount_usd: amount,
            method,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_form() -> TopUpForm {
        let mut form = TopUpForm {
            method: Some(PaymentMethod::Stripe),
            card_number: "4242424242424242".into(),
            expiry: "12/27".into(),
            cvc: "123".into(),
            ..Default::default()
        };
        form.select_amount(300);
        form
    }

    #[test]
    fn test_card_top_up() {
        let request = card_form().validate().unwrap();
        assert_eq!(request.amount_usd, 300.0);
        assert_eq!(request.method, PaymentMethod::Stripe);
        assert!(card_form().is_selected(300));
    }

    #[test]
    fn test_missing_method_and_details() {
        let no_method = TopUpForm {
            method: None,
            ..card_form()
        };
        assert!(no_method.validate().is_err());

        let no_cvc = TopUpForm {
            cvc: " ".into(),
            ..card_form()
        };
        assert!(no_cvc.validate().is_err());

        let crypto = TopUpForm {
            method: Some(PaymentMethod::Pelago),
            ..card_form()
        };
        assert!(crypto.validate().is_err());
        let crypto = TopUpForm {
            crypto_address: "0xabc".into(),
            ..crypto
        };
        assert!(crypto.validate().is_ok());
    }

    #[test]
    fn test_amount_bounds() {
        let mut form = card_form();
        form.amount = "5".into();
        assert!(form.validate().is_err());
        form.amount = "9999".into();
        assert!(form.validate().is_ok());
        form.amount = "".into();
        assert!(form.validate().is_err());
    }
}
