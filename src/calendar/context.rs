use time::Date;

/// The working state of a calendar: which month is on display, which dates
/// are selected, and which dates may be selected at all.
///
/// A `CalendarContext` belongs to whatever is displaying the calendar.  It is
/// mutated in place as the user navigates, and handed by reference to a
/// [`CalendarAdapter`](super::CalendarAdapter) whenever the display needs to
/// be recomputed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CalendarContext {
    /// Anchors the displayed month; the day of the month is ignored
    pub cursor: Date,

    /// Start of the selected range
    pub start: Date,

    /// End of the selected range; equal to `start` when a single date is
    /// selected
    pub end: Date,

    /// Earliest selectable date (inclusive)
    pub min: Date,

    /// Latest selectable date (inclusive)
    pub max: Date,
}

impl CalendarContext {
    /// Create a context displaying the month of `date` with `date` selected
    /// and no bounds
    pub fn new(date: Date) -> CalendarContext {
        CalendarContext {
            cursor: date,
            start: date,
            end: date,
            min: Date::MIN,
            max: Date::MAX,
        }
    }

    pub fn min(mut self, min: Date) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: Date) -> Self {
        self.max = max;
        self
    }

    pub fn selection(mut self, start: Date, end: Date) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Returns `true` if `date` lies within the selected range.  The range is
    /// inclusive at both ends and may be given in either order.
    pub fn is_selected(&self, date: Date) -> bool {
        let (lo, hi) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        (lo..=hi).contains(&date)
    }
}
