//! Форматирование числовых значений в таблицах

/// Число с фиксированным количеством знаков после точки и пробелом
/// как разделителем тысяч: `1234.567, 2` -> `"1 234.57"`
pub fn format_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (integer_part, fraction) = match formatted.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (formatted.as_str(), None),
    };

    let negative = integer_part.starts_with('-');
    let digits = integer_part.trim_start_matches('-');

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    match fraction {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Энергия в МВт·ч, всегда два знака после точки
pub fn format_mwh(value: f64) -> String {
    format_with_decimals(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_with_decimals(1234567.89, 2), "1 234 567.89");
        assert_eq!(format_with_decimals(999.0, 0), "999");
    }

    #[test]
    fn negative_values() {
        assert_eq!(format_with_decimals(-1234.5, 2), "-1 234.50");
        assert_eq!(format_with_decimals(-12.0, 0), "-12");
    }

    #[test]
    fn mwh_uses_two_decimals() {
        assert_eq!(format_mwh(160.0), "160.00");
        assert_eq!(format_mwh(0.005), "0.01");
    }
}
