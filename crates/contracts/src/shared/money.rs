//! Форматирование денежных сумм (USD) для таблиц, карточек и CSV.

/// Группировка разрядов запятой: 2450 -> "2,450"
fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

fn split_cents(amount: f64) -> (u64, u64) {
    let cents = (amount.abs() * 100.0).round() as u64;
    (cents / 100, cents % 100)
}

/// "$2,450.00", "-$89.50"
pub fn format_usd(amount: f64) -> String {
    let (whole, cents) = split_cents(amount);
    let sign = if amount < 0.0 && (whole > 0 || cents > 0) { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(whole), cents)
}

/// Сумма со знаком для истории списаний: "+$10.00" / "-$10.00"
pub fn format_signed_usd(amount: f64) -> String {
    if amount > 0.0 {
        format!("+{}", format_usd(amount))
    } else {
        format_usd(amount)
    }
}

/// Сумма без символа валюты и разделителей разрядов (для CSV): "-89.50"
pub fn plain_amount(amount: f64) -> String {
    let (whole, cents) = split_cents(amount);
    let sign = if amount < 0.0 && (whole > 0 || cents > 0) { "-" } else { "" };
    format!("{}{}.{:02}", sign, whole, cents)
}

/// Допустимый ввод денежного поля: цифры, не более одной точки и не более
/// двух знаков после неё. Пустая строка допустима (поле очищено).
pub fn is_money_input(value: &str) -> bool {
    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (value, None),
    };
    let whole_ok = whole.chars().all(|c| c.is_ascii_digit());
    let fraction_ok = fraction
        .map(|f| f.len() <= 2 && f.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(true);
    whole_ok && fraction_ok
}

/// Разбор числового поля формы; некорректный ввод трактуется как 0
pub fn parse_amount(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(2450.0), "$2,450.00");
        assert_eq!(format_usd(-89.5), "-$89.50");
        assert_eq!(format_usd(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_signed_usd() {
        assert_eq!(format_signed_usd(10.0), "+$10.00");
        assert_eq!(format_signed_usd(-10.0), "-$10.00");
    }

    #[test]
    fn test_plain_amount() {
        assert_eq!(plain_amount(-89.5), "-89.50");
        assert_eq!(plain_amount(2450.0), "2450.00");
        assert_eq!(plain_amount(-0.001), "0.00");
    }

    #[test]
    fn test_money_input() {
        assert!(is_money_input(""));
        assert!(is_money_input("1000"));
        assert!(is_money_input("1000."));
        assert!(is_money_input("1000.5"));
        assert!(is_money_input(".25"));
        assert!(!is_money_input("1000.505"));
        assert!(!is_money_input("10a"));
        assert!(!is_money_input("1.2.3"));
        assert!(!is_money_input("-5"));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount(" 40 "), 40.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
    }
}
