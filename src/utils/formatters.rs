// Formatting utilities

/// Format a number with thousands separators
pub fn format_number(n: i64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 && chars[i - 1] != '-' {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format points with suffix (e.g., "1.2k", "3.5M")
pub fn format_points_short(points: i64) -> String {
    if points >= 1_000_000 {
        format!("{:.1}M", points as f64 / 1_000_000.0)
    } else if points >= 1_000 {
        format!("{:.1}k", points as f64 / 1_000.0)
    } else {
        points.to_string()
    }
}

/// Format a raw logged amount, dropping the fraction when it is whole
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < i64::MAX as f64 {
        format_number(amount as i64)
    } else {
        format!("{:.2}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1000000), "1,000,000");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(-123456), "-123,456");
    }

    #[test]
    fn test_format_points_short() {
        assert_eq!(format_points_short(500), "500");
        assert_eq!(format_points_short(1500), "1.5k");
        assert_eq!(format_points_short(1500000), "1.5M");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(400.0), "400");
        assert_eq!(format_amount(35000.0), "35,000");
        assert_eq!(format_amount(12.5), "12.50");
    }
}
