//! Formatting utilities for display

/// Group an amount with tr-TR separators: dot for thousands, comma for
/// decimals. Fraction digits only appear when the amount has them.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    // Two fraction digits, then a ",00" tail is dropped so whole amounts stay bare.
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if frac_part != "00" {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

/// Price with the fixed currency label, e.g. `3.500 TL`.
pub fn format_price(amount: f64) -> String {
    format!("{} TL", format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_small() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(7.0), "7");
        assert_eq!(format_amount(700.0), "700");
    }

    #[test]
    fn test_format_amount_thousands() {
        assert_eq!(format_amount(3500.0), "3.500");
        assert_eq!(format_amount(5000.0), "5.000");
        assert_eq!(format_amount(12345.0), "12.345");
        assert_eq!(format_amount(1234567.0), "1.234.567");
    }

    #[test]
    fn test_format_amount_fraction() {
        assert_eq!(format_amount(1234.5), "1.234,50");
        assert_eq!(format_amount(0.25), "0,25");
    }

    #[test]
    fn test_format_amount_negative() {
        // A "discount" larger than the price is permitted upstream, so
        // negative amounts can reach the formatter.
        assert_eq!(format_amount(-1500.0), "-1.500");
    }

    #[test]
    fn test_format_price_suffix() {
        assert_eq!(format_price(3500.0), "3.500 TL");
        assert_eq!(format_price(700.0), "700 TL");
    }
}
