use super::context::CalendarContext;
use super::util::{
    add_months, grid_days, is_out_of_bounds, is_same_month, month_start, weekdays, DAYS_IN_WEEK,
    GRID_DAYS,
};
use crate::locale::Locale;
use time::Date;

/// Total number of items returned by [`CalendarAdapter::items()`]: one header
/// row plus the day grid
pub const GRID_ITEMS: usize = DAYS_IN_WEEK + GRID_DAYS;

/// Turns a [`CalendarContext`] into the data needed to draw a calendar page.
///
/// Implementations are pure: they neither keep nor modify the context.
pub trait CalendarAdapter {
    /// The cells of the page, in reading order
    fn items(&self, ctx: &CalendarContext) -> Vec<CalendarItem>;

    /// Heading for the page
    fn title(&self, ctx: &CalendarContext) -> String;

    /// Cursor for the page before this one, or `None` at the beginning of time
    fn prev_cursor(&self, ctx: &CalendarContext) -> Option<Date>;

    /// Cursor for the page after this one, or `None` at the end of time
    fn next_cursor(&self, ctx: &CalendarContext) -> Option<Date>;

    /// Whether the page before this one contains any selectable date
    fn can_prev(&self, ctx: &CalendarContext) -> bool;

    /// Whether the page after this one contains any selectable date
    fn can_next(&self, ctx: &CalendarContext) -> bool;
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ItemKind {
    /// Weekday name in the header row
    Weekday,
    /// A day of the month
    Day,
}

/// A single cell of a calendar page
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CalendarItem {
    pub kind: ItemKind,

    /// Weekday abbreviation for header cells, day of the month for day cells
    pub text: String,

    /// The date of a day cell.  Always `None` for header cells; also `None`
    /// for day cells whose date lies outside the range of [`Date`].
    pub date: Option<Date>,

    pub disabled: bool,

    /// `true` if the cell's date is not in the displayed month
    pub other_month: bool,

    /// `true` if the cell's date is part of the selected range
    pub selected: bool,
}

impl CalendarItem {
    fn weekday(text: &str) -> CalendarItem {
        CalendarItem {
            kind: ItemKind::Weekday,
            text: text.to_owned(),
            date: None,
            disabled: false,
            other_month: false,
            selected: false,
        }
    }

    fn day(ctx: &CalendarContext, date: Date) -> CalendarItem {
        let other_month = !is_same_month(date, ctx.cursor);
        CalendarItem {
            kind: ItemKind::Day,
            text: date.day().to_string(),
            date: Some(date),
            disabled: other_month || is_out_of_bounds(date, ctx.min, ctx.max),
            other_month,
            selected: ctx.is_selected(date),
        }
    }

    fn out_of_time() -> CalendarItem {
        CalendarItem {
            kind: ItemKind::Day,
            text: String::new(),
            date: None,
            disabled: true,
            other_month: true,
            selected: false,
        }
    }

    pub fn is_header(&self) -> bool {
        self.kind == ItemKind::Weekday
    }
}

/// A [`CalendarAdapter`] that shows one month per page, laid out as six
/// Monday-first weeks.
///
/// ```text
///  Mo  Tu  We  Th  Fr  Sa  Su
///  25  26  27  28  29  30   1
///   2   3   4   5   6   7   8
///   9  10  11  12  13  14  15
///  16  17  18  19  20  21  22
///  23  24  25  26  27  28  29
///  30  31   1   2   3   4   5
/// ```
///
/// Days belonging to the neighboring months are always disabled, as are days
/// before `min` or after `max`.  Navigation is decided a whole month at a
/// time: the previous month is reachable if its last day is not before
/// `min`, and the next month is reachable if its first day is not after
/// `max`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DateAdapter<'a> {
    locale: &'a Locale,
}

impl<'a> DateAdapter<'a> {
    pub fn new(locale: &'a Locale) -> DateAdapter<'a> {
        DateAdapter { locale }
    }
}

impl CalendarAdapter for DateAdapter<'_> {
    fn items(&self, ctx: &CalendarContext) -> Vec<CalendarItem> {
        log::trace!("Building month grid for {}", ctx.cursor);
        let mut items = Vec::with_capacity(GRID_ITEMS);
        items.extend(weekdays().map(|wd| CalendarItem::weekday(self.locale.weekday_abbrev(wd))));
        items.extend(grid_days(ctx.cursor).into_iter().map(|d| match d {
            Some(date) => CalendarItem::day(ctx, date),
            None => CalendarItem::out_of_time(),
        }));
        items
    }

    fn title(&self, ctx: &CalendarContext) -> String {
        self.locale.month_year_title(ctx.cursor)
    }

    fn prev_cursor(&self, ctx: &CalendarContext) -> Option<Date> {
        add_months(ctx.cursor, -1)
    }

    fn next_cursor(&self, ctx: &CalendarContext) -> Option<Date> {
        add_months(ctx.cursor, 1)
    }

    fn can_prev(&self, ctx: &CalendarContext) -> bool {
        month_start(ctx.cursor)
            .previous_day()
            .is_some_and(|last| last >= ctx.min)
    }

    fn can_next(&self, ctx: &CalendarContext) -> bool {
        self.next_cursor(ctx).is_some_and(|first| first <= ctx.max)
    }
}
