//! Shared formatting utilities for the UI layer.

use chrono::NaiveDate;

/// Group digits the Indian way: last three, then pairs ("1,23,456").
pub fn group_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Rupee amount with the currency sign, e.g. "₹22,500".
pub fn format_inr(amount: u64) -> String {
    format!("₹{}", group_inr(amount))
}

/// "Jan 15, 2024".
pub fn format_date_human(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Megabytes with one decimal; a gigabyte or more switches unit.
pub fn format_size_mb(mb: f64) -> String {
    if mb >= 1024.0 {
        format!("{:.1} GB", mb / 1024.0)
    } else {
        format!("{mb:.1} MB")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inr_grouping() {
        assert_eq!(group_inr(0), "0");
        assert_eq!(group_inr(950), "950");
        assert_eq!(group_inr(1200), "1,200");
        assert_eq!(group_inr(22_500), "22,500");
        assert_eq!(group_inr(123_456), "1,23,456");
        assert_eq!(group_inr(12_345_678), "1,23,45,678");
    }

    #[test]
    fn inr_with_symbol() {
        assert_eq!(format_inr(22_500), "₹22,500");
    }

    #[test]
    fn human_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date_human(date), "Jan 5, 2024");
    }

    #[test]
    fn sizes() {
        assert_eq!(format_size_mb(2.5), "2.5 MB");
        assert_eq!(format_size_mb(2048.0), "2.0 GB");
    }
}
