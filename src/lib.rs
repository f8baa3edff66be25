//! Month-grid calendar adapter
//!
//! Given a [`CalendarContext`] (the displayed month, the selected range, and
//! the selectable bounds) and a [`Locale`], a [`DateAdapter`] produces the
//! cells of a Monday-first month page, its title, and whether the previous
//! and next months may be navigated to.
//!
//! ```
//! use daygrid::{CalendarAdapter, CalendarContext, DateAdapter, Locale};
//! use time::macros::date;
//!
//! let locale = Locale::default();
//! let ctx = CalendarContext::new(date!(2022 - 05 - 13)).min(date!(2022 - 05 - 09));
//! let adapter = DateAdapter::new(&locale);
//! assert_eq!(adapter.title(&ctx), "May 2022");
//! assert_eq!(adapter.items(&ctx).len(), 49);
//! assert!(!adapter.can_prev(&ctx));
//! ```
pub mod calendar;
pub mod locale;
pub use crate::calendar::{CalendarAdapter, CalendarContext, CalendarItem, DateAdapter};
pub use crate::locale::{Lang, Locale, UnknownLangError};
