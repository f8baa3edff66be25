mod adapter;
mod context;
pub mod util;
pub use self::adapter::{CalendarAdapter, CalendarItem, DateAdapter, ItemKind, GRID_ITEMS};
pub use self::context::CalendarContext;
