use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

pub const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub trait Clock {
    /// Today's calendar date as `YYYY-MM-DD`.
    fn today(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> String {
        iso_date(OffsetDateTime::now_utc().date())
    }
}

pub fn iso_date(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_default()
}

#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FixedClock(pub &'static str);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> String {
        self.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use time::{Date, Month};

    use super::{iso_date, Clock, SystemClock};

    #[test]
    fn iso_date_is_zero_padded() {
        let date = Date::from_calendar_date(2025, Month::March, 7).expect("valid date");
        assert_eq!(iso_date(date), "2025-03-07");
    }

    #[test]
    fn system_clock_emits_iso_shape() {
        let today = SystemClock.today();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
        assert_eq!(&today[7..8], "-");
    }
}
