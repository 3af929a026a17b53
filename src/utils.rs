use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Saturday is draw day; a Saturday rolls over to the following week.
pub fn next_draw_date(today: NaiveDate) -> NaiveDate {
    let days_from_sunday = today.weekday().num_days_from_sunday();
    let saturday = Weekday::Sat.num_days_from_sunday();
    let days_ahead = match (saturday + 7 - days_from_sunday) % 7 {
        0 => 7,
        n => n,
    };
    today + Duration::days(i64::from(days_ahead))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
