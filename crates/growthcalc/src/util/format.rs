/// Format a currency value without cents (the metric cards show whole dollars)
pub fn format_currency(value: f64) -> String {
    let abs_value = value.abs();
    let dollars = abs_value.round() as i64;

    // Add thousands separators
    let dollars_str = dollars.to_string();
    let mut result = String::new();
    for (i, c) in dollars_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let dollars_formatted: String = result.chars().rev().collect();

    if value >= 0.0 {
        format!("${}", dollars_formatted)
    } else {
        format!("-${}", dollars_formatted)
    }
}

/// Format a rate that is already expressed as a percentage (1.76 -> "1.76%")
pub fn format_rate_pct(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Format a currency value in compact form (e.g., $2.1M, $450K, $50)
pub fn format_compact_currency(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}${:.0}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}${:.0}", sign, abs_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(25_000.0), "$25,000");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000");
        assert_eq!(format_currency(5_822.42), "$5,822");
        assert_eq!(format_currency(-1_500.0), "-$1,500");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn test_format_rate_pct() {
        assert_eq!(format_rate_pct(1.76), "1.76%");
        assert_eq!(format_rate_pct(23.2897), "23.29%");
    }

    #[test]
    fn test_format_compact_currency() {
        assert_eq!(format_compact_currency(2_100_000.0), "$2.1M");
        assert_eq!(format_compact_currency(450_000.0), "$450K");
        assert_eq!(format_compact_currency(50.0), "$50");
        assert_eq!(format_compact_currency(-450_000.0), "-$450K");
    }
}
