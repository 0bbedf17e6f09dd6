/// Utilities for date handling
///
/// Drafts keep calendar dates in the `YYYY-MM-DD` form the date inputs
/// use; the backend speaks ISO timestamps on both directions.
use chrono::NaiveDate;

/// Normalize an ISO timestamp (or plain date) to `YYYY-MM-DD`.
/// Example: "2024-09-20T14:02:26.000Z" -> "2024-09-20"
pub fn to_input_date(timestamp: &str) -> String {
    timestamp.split('T').next().unwrap_or(timestamp).to_string()
}

/// Format an ISO date string as DD.MM.YYYY for tables.
/// Example: "2024-09-20" or "2024-09-20T14:02:26Z" -> "20.09.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Serialize a `YYYY-MM-DD` input value as the midnight ISO timestamp the
/// backend stores. `None` when the value is empty or not a real date.
pub fn input_date_to_timestamp(date: &str) -> Option<String> {
    let trimmed = date.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|d| format!("{}T00:00:00.000Z", d.format("%Y-%m-%d")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_input_date() {
        assert_eq!(to_input_date("2024-09-20T14:02:26.000Z"), "2024-09-20");
        assert_eq!(to_input_date("2024-09-20"), "2024-09-20");
        assert_eq!(to_input_date(""), "");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-09-20"), "20.09.2024");
        assert_eq!(format_date("2024-09-20T14:02:26.000Z"), "20.09.2024");
    }

    #[test]
    fn test_input_date_to_timestamp() {
        assert_eq!(
            input_date_to_timestamp("2024-09-20"),
            Some("2024-09-20T00:00:00.000Z".to_string())
        );
        assert_eq!(input_date_to_timestamp(""), None);
        assert_eq!(input_date_to_timestamp("   "), None);
        assert_eq!(input_date_to_timestamp("2024-02-30"), None);
        assert_eq!(input_date_to_timestamp("not a date"), None);
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(to_input_date("invalid"), "invalid");
    }
}
