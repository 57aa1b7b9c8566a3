//! Форматирование сумм и чисел для таблиц и карточек

/// Число с разделителем тысяч `,` и `decimals` знаками после точки
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        result.insert(0, '-');
    }
    match decimal_part {
        Some(d) => format!("{}.{}", result, d),
        None => result,
    }
}

/// Сумма в долларах: `$1,234.50`
pub fn format_money(value: f64) -> String {
    let number = format_number_with_decimals(value, 2);
    match number.strip_prefix('-') {
        Some(abs) => format!("-${}", abs),
        None => format!("${}", number),
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number_with_decimals(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number_with_decimals(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-1000.5, 1), "-1,000.5");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1500.0), "$1,500.00");
        assert_eq!(format_money(-25.5), "-$25.50");
        assert_eq!(format_percent(0.5), "0.50%");
    }
}
