use chrono::{Datelike, NaiveDate};

/// Today's date according to the browser clock
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// Check if a date is today
pub fn is_today(date: NaiveDate) -> bool {
    date == today()
}

/// Weekday of the first day of the month (0 = Sunday, 1 = Monday, etc.)
pub fn first_day_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Month before the given one, wrapping the year
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

/// Month after the given one, wrapping the year
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

/// Short display form used by the date picker button, e.g. `"15/01/2024"`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}


#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_today_matches_chrono() {
        assert!(is_today(today()));
        assert_eq!(today(), chrono::Local::now().date_naive());
    }
}
