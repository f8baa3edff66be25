use daygrid::{CalendarAdapter, CalendarContext, CalendarItem, DateAdapter, Locale};
use thiserror::Error;
use time::Date;

/// The month currently on screen, along with everything needed to recompute
/// it
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthView {
    pub(crate) today: Date,
    context: CalendarContext,
    locale: Locale,
}

impl MonthView {
    pub(crate) fn new(today: Date, context: CalendarContext, locale: Locale) -> Self {
        MonthView {
            today,
            context,
            locale,
        }
    }

    fn adapter(&self) -> DateAdapter<'_> {
        DateAdapter::new(&self.locale)
    }

    pub(crate) fn items(&self) -> Vec<CalendarItem> {
        self.adapter().items(&self.context)
    }

    pub(crate) fn title(&self) -> String {
        self.adapter().title(&self.context)
    }

    pub(crate) fn can_prev(&self) -> bool {
        self.adapter().can_prev(&self.context)
    }

    pub(crate) fn can_next(&self) -> bool {
        self.adapter().can_next(&self.context)
    }

    pub(crate) fn cursor(&self) -> Date {
        self.context.cursor
    }

    pub(crate) fn prev_month(&mut self) -> Result<(), NavigationError> {
        let adapter = self.adapter();
        let cursor = adapter
            .prev_cursor(&self.context)
            .ok_or(NavigationError::OutOfTime)?;
        if !adapter.can_prev(&self.context) {
            return Err(NavigationError::BeforeMin);
        }
        self.context.cursor = cursor;
        Ok(())
    }

    pub(crate) fn next_month(&mut self) -> Result<(), NavigationError> {
        let adapter = self.adapter();
        let cursor = adapter
            .next_cursor(&self.context)
            .ok_or(NavigationError::OutOfTime)?;
        if !adapter.can_next(&self.context) {
            return Err(NavigationError::AfterMax);
        }
        self.context.cursor = cursor;
        Ok(())
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.context.cursor = self.today;
    }

    pub(crate) fn switch_lang(&mut self) {
        let lang = self.locale.lang().next();
        if let Err(e) = self.locale.set_lang(lang.tag()) {
            // Every `Lang` has a tag that parses back to itself.
            log::error!("Failed to switch language: {e}");
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum NavigationError {
    #[error("reached the end of time")]
    OutOfTime,
    #[error("no selectable dates before this month")]
    BeforeMin,
    #[error("no selectable dates after this month")]
    AfterMax,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn view(context: CalendarContext) -> MonthView {
        MonthView::new(date!(2022 - 05 - 20), context, Locale::default())
    }

    #[test]
    fn test_navigate() {
        let mut v = view(CalendarContext::new(date!(2022 - 01 - 31)));
        assert_eq!(v.next_month(), Ok(()));
        assert_eq!(v.cursor(), date!(2022 - 02 - 01));
        assert_eq!(v.title(), "February 2022");
        assert_eq!(v.prev_month(), Ok(()));
        assert_eq!(v.prev_month(), Ok(()));
        assert_eq!(v.cursor(), date!(2021 - 12 - 01));
        assert_eq!(v.title(), "December 2021");
    }

    #[test]
    fn test_navigate_within_bounds() {
        let ctx = CalendarContext::new(date!(2022 - 05 - 13))
            .min(date!(2022 - 04 - 15))
            .max(date!(2022 - 06 - 15));
        let mut v = view(ctx);
        assert_eq!(v.prev_month(), Ok(()));
        assert_eq!(v.cursor(), date!(2022 - 04 - 01));
        assert!(!v.can_prev());
        assert_eq!(v.prev_month(), Err(NavigationError::BeforeMin));
        assert_eq!(v.cursor(), date!(2022 - 04 - 01));
        assert_eq!(v.next_month(), Ok(()));
        assert_eq!(v.next_month(), Ok(()));
        assert_eq!(v.cursor(), date!(2022 - 06 - 01));
        assert!(!v.can_next());
        assert_eq!(v.next_month(), Err(NavigationError::AfterMax));
        assert_eq!(v.cursor(), date!(2022 - 06 - 01));
    }

    #[test]
    fn test_navigate_end_of_time() {
        let mut v = view(CalendarContext::new(Date::MAX));
        assert_eq!(v.next_month(), Err(NavigationError::OutOfTime));
        let mut v = view(CalendarContext::new(Date::MIN));
        assert_eq!(v.prev_month(), Err(NavigationError::OutOfTime));
    }

    #[test]
    fn test_jump_to_today() {
        let mut v = view(CalendarContext::new(date!(1999 - 12 - 31)));
        v.jump_to_today();
        assert_eq!(v.cursor(), date!(2022 - 05 - 20));
        assert_eq!(v.title(), "May 2022");
    }

    #[test]
    fn test_switch_lang() {
        let mut v = view(CalendarContext::new(date!(2022 - 05 - 13)));
        v.switch_lang();
        assert_eq!(v.title(), "Mei 2022");
        assert_eq!(v.items()[0].text, "Sen");
        v.switch_lang();
        assert_eq!(v.title(), "May 2022");
        assert_eq!(v.items()[0].text, "Mo");
    }
}
