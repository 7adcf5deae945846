//! Форматирование цен в рублях

/// Неразрывный пробел: разделитель разрядов и отступ перед знаком валюты
const NBSP: char = '\u{a0}';

/// Форматирует цену как `1 250 ₽`: без копеек, с группировкой разрядов.
///
/// Половины округляются от нуля, как это делает `Intl.NumberFormat`.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return format!("—{}₽", NBSP);
    }

    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(NBSP);
        }
        grouped.push(c);
    }

    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}{}{}₽", sign, grouped, NBSP)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: String) -> String {
        s.replace(NBSP, " ")
    }

    #[test]
    fn test_format_price() {
        assert_eq!(plain(format_price(0.0)), "0 ₽");
        assert_eq!(plain(format_price(390.0)), "390 ₽");
        assert_eq!(plain(format_price(1250.0)), "1 250 ₽");
        assert_eq!(plain(format_price(1234567.0)), "1 234 567 ₽");
        assert_eq!(plain(format_price(-1500.0)), "-1 500 ₽");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(plain(format_price(449.5)), "450 ₽");
        assert_eq!(plain(format_price(449.49)), "449 ₽");
        assert_eq!(plain(format_price(999.6)), "1 000 ₽");
    }

    #[test]
    fn test_uses_nbsp() {
        assert_eq!(format_price(1000.0), "1\u{a0}000\u{a0}₽");
    }
}
