use chrono::{Datelike, Duration, NaiveDate};

/// Genitive month names for "24 ноября" style labels. Display locale is
/// fixed to Russian; the model itself never looks at these strings.
const MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// The 7 consecutive dates of the Monday-aligned week containing `anchor`.
pub fn week_dates(anchor: NaiveDate) -> [NaiveDate; 7] {
    let monday = monday_of(anchor);
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

pub fn day_month_label(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTHS[date.month0() as usize])
}
