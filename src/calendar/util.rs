//! Date arithmetic for laying out a Monday-first month grid

use std::iter::successors;
use time::{Date, Duration, Month, Weekday};

pub const DAYS_IN_WEEK: usize = 7;

/// Number of week rows in a month grid
pub const GRID_WEEKS: usize = 6;

/// Number of day cells in a month grid
pub const GRID_DAYS: usize = DAYS_IN_WEEK * GRID_WEEKS;

pub trait WeekdayExt {
    /// Column of the weekday in a Monday-first grid
    fn index0(&self) -> usize;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> usize {
        self.number_days_from_monday().into()
    }
}

/// Iterate over the days of the week, Monday through Sunday
pub fn weekdays() -> impl Iterator<Item = Weekday> {
    successors(Some(Weekday::Monday), |wd| {
        Some(wd.next()).filter(|&wd2| wd2 != Weekday::Monday)
    })
}

pub fn month_start(date: Date) -> Date {
    // Day 1 exists in every month, so this cannot actually fail.
    date.replace_day(1).unwrap_or(date)
}

pub fn month_end(date: Date) -> Date {
    successors(Some(date), |d| d.next_day().filter(|d2| d2.month() == date.month()))
        .last()
        .unwrap_or(date)
}

pub fn is_same_month(a: Date, b: Date) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Returns `true` if `date` is before `min` or after `max`.  Both bounds are
/// inclusive.
pub fn is_out_of_bounds(date: Date, min: Date, max: Date) -> bool {
    date < min || date > max
}

/// Returns the first day of the month `n` months after (or, for negative `n`,
/// before) the month containing `date`.
///
/// Only the year and month of `date` are consulted, so stepping from the 31st
/// never overflows into the month after next.  Returns `None` if the result
/// would fall outside the range of [`Date`].
pub fn add_months(date: Date, n: i32) -> Option<Date> {
    let index = i64::from(date.year()) * 12 + i64::from(u8::from(date.month()) - 1) + i64::from(n);
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = u8::try_from(index.rem_euclid(12) + 1).ok()?;
    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, 1).ok()
}

/// Returns the first cell of the month grid for `date`'s month: the Monday
/// on or before the first of the month
pub fn grid_start(date: Date) -> Option<Date> {
    let first = month_start(date);
    n_days_after(first, -leading_days(first))
}

/// Returns the last cell of the month grid for `date`'s month, 41 days after
/// [`grid_start()`]
pub fn grid_end(date: Date) -> Option<Date> {
    grid_start(date).and_then(|start| n_days_after(start, 41))
}

/// Returns the dates of all cells of the month grid for `date`'s month, in
/// order.  A cell is `None` if its date cannot be represented, which can only
/// happen in the first and last months of time.
pub fn grid_days(date: Date) -> [Option<Date>; GRID_DAYS] {
    let first = month_start(date);
    let lead = leading_days(first);
    std::array::from_fn(|i| {
        i64::try_from(i)
            .ok()
            .and_then(|i| n_days_after(first, i - lead))
    })
}

/// Number of days from the previous month shown before the first of the
/// month
fn leading_days(first: Date) -> i64 {
    first.weekday().number_days_from_monday().into()
}

fn n_days_after(date: Date, n: i64) -> Option<Date> {
    date.checked_add(Duration::days(n))
}
