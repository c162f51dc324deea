use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::aggregate::IndividualPromoCode;
use crate::shared::config::CodesConfig;

/// Длина hex-суффикса из UUID v4 (без дефисов)
const MAX_SUFFIX_LEN: usize = 32;

/// Префикс кода: имя группы в верхнем регистре без пробелов, первые `len` символов
pub fn code_prefix(name: &str, len: usize) -> String {
    name.to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(len)
        .collect()
}

/// Длина суффикса: не меньше заданной и такая, чтобы пространство суффиксов
/// минимум вдвое превышало размер партии
pub fn suffix_len_for(quantity: usize, min_len: usize) -> usize {
    let mut len = min_len.clamp(1, MAX_SUFFIX_LEN);
    while len < MAX_SUFFIX_LEN && 16f64.powi(len as i32) < (quantity as f64) * 2.0 {
        len += 1;
    }
    len
}

fn random_suffix(len: usize) -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .to_uppercase()
        .chars()
        .take(len)
        .collect()
}

/// Партия из `quantity` открытых кодов, уникальных в пределах группы
pub fn generate_codes(
    name: &str,
    quantity: usize,
    config: &CodesConfig,
    created_time: DateTime<Utc>,
) -> Vec<IndividualPromoCode> {
    let prefix = code_prefix(name, config.prefix_len);
    let suffix_len = suffix_len_for(quantity, config.suffix_len);

    let mut seen = HashSet::with_capacity(quantity);
    let mut codes = Vec::with_capacity(quantity);
    while codes.len() < quantity {
        let code = format!("{}{}", prefix, random_suffix(suffix_len));
        if seen.insert(code.clone()) {
            codes.push(IndividualPromoCode::open(code, created_time));
        }
    }
    codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_promo_group::aggregate::PromoCodeStatus;

    fn config() -> CodesConfig {
        CodesConfig {
            prefix_len: 4,
            suffix_len: 4,
        }
    }

    #[test]
    fn test_prefix() {
        assert_eq!(code_prefix("Test Group", 4), "TEST");
        assert_eq!(code_prefix("a b", 4), "AB");
        assert_eq!(code_prefix("by bit team", 4), "BYBI");
        assert_eq!(code_prefix("", 4), "");
    }

    #[test]
    fn test_suffix_widens_for_large_batches() {
        assert_eq!(suffix_len_for(3, 4), 4);
        assert_eq!(suffix_len_for(32_768, 4), 4);
        assert_eq!(suffix_len_for(40_000, 4), 5);
    }

    #[test]
    fn test_suffix_is_uppercase_hex() {
        let suffix = random_suffix(6);
        assert_eq!(suffix.len(), 6);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[test]
    fn test_generated_codes_are_open_and_unique() {
        let now = Utc::now();
        let codes = generate_codes("Test Group", 500, &config(), now);
        assert_eq!(codes.len(), 500);

        let unique: HashSet<_> = codes.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(unique.len(), 500);

        for code in &codes {
            assert!(code.code.starts_with("TEST"));
            assert_eq!(code.code.len(), 8);
            assert_eq!(code.status, PromoCodeStatus::Open);
            assert!(code.redeem_time.is_none());
            assert!(code.user_id.is_none());
            assert!(code.user_email.is_none());
        }
    }
}
