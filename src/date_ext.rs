use chrono::{Datelike, Duration, NaiveDate};

pub trait NaiveDateExt
where
    Self: Sized,
{
    fn week_monday(self) -> Self;
}

impl NaiveDateExt for NaiveDate {
    /// The Monday of the calendar week containing this date.
    fn week_monday(self) -> Self {
        self - Duration::days(self.weekday().num_days_from_monday() as i64)
    }
}
