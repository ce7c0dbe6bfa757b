use crate::prelude::*;
use crate::types::Calendar;

/// The date component that fell outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Component {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

/// Error returned when a year, month or day does not name a real date in
/// the calendar it was given for, or when a conversion would leave the
/// supported year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("invalid {calendar} date {year:04}-{month:02}-{day:02}: {component} out of range")]
pub struct InvalidDate {
    calendar: Calendar,
    year: i32,
    month: u8,
    day: u8,
    component: Component,
}

impl InvalidDate {
    // Not const: `debug!` expands to a `log` call with the `logging` feature.
    #[allow(clippy::missing_const_for_fn)]
    pub(crate) fn new(
        calendar: Calendar,
        (year, month, day): (i32, u8, u8),
        component: Component,
    ) -> Self {
        debug!("rejected {calendar} date {year:04}-{month:02}-{day:02}: {component}");
        Self {
            calendar,
            year,
            month,
            day,
            component,
        }
    }

    /// Calendar the rejected date was interpreted in
    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    /// The rejected (year, month, day) as given by the caller
    pub const fn date(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Which component was out of range
    pub const fn component(&self) -> Component {
        self.component
    }
}
