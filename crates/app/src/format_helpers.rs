//! Date formatting for tables. Inputs are ISO-8601 strings
//! (e.g. "2026-09-20T21:35:00Z").

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format an ISO date string as "Sep 20, 2026".
///
/// Returns the input unchanged when it does not start with `YYYY-MM-DD`.
pub fn format_date_human(date_str: &str) -> String {
    let Some(date) = date_str.get(..10) else {
        return date_str.to_string();
    };
    let mut parts = date.split('-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return date_str.to_string();
    };

    let month_name = month
        .parse::<usize>()
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|idx| MONTH_NAMES.get(idx));

    match (month_name, day.parse::<u32>()) {
        (Some(name), Ok(day_num)) if year.len() == 4 => format!("{name} {day_num}, {year}"),
        _ => date_str.to_string(),
    }
}
