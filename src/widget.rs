use crate::theme::{day, nav, TITLE_STYLE, WEEKDAY_STYLE};
use crate::view::MonthView;
use daygrid::calendar::util::DAYS_IN_WEEK;
use daygrid::CalendarItem;
use ratatui::{prelude::*, widgets::*};
use std::iter::zip;
use time::Date;

/// Width of the grid in columns: seven days, with a blank column between
/// each pair of adjacent days
const MAIN_WIDTH: u16 = 34;

/// Number of columns per day of week, including the blank separator
const DAY_WIDTH: u16 = 5;

const TITLE_LINE: u16 = 0;

const RULE_LINE: u16 = 1;

const HEADER_LINE: u16 = 2;

/// Number of lines taken up by the title, its rule, the weekday header, and
/// the six weeks
const GRID_LINES: u16 = 9;

const PREV_ARROW: &str = "<";
const NEXT_ARROW: &str = ">";

const ACS_HLINE: char = '─';

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid;

impl MonthGrid {
    fn grid_area(area: Rect) -> Rect {
        Rect {
            x: area.x + area.width.saturating_sub(MAIN_WIDTH) / 2,
            y: area.y + area.height.saturating_sub(GRID_LINES) / 2,
            width: MAIN_WIDTH.min(area.width),
            height: GRID_LINES.min(area.height),
        }
    }
}

impl StatefulWidget for MonthGrid {
    type State = MonthView;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let mut canvas = BufferCanvas::new(Self::grid_area(area), buf);
        canvas.draw_title(&state.title(), state.can_prev(), state.can_next());
        canvas.hline(RULE_LINE, 0, ACS_HLINE, MAIN_WIDTH);
        let today = state.today;
        let items = state.items();
        for (row, week) in zip(0u16.., items.chunks(DAYS_IN_WEEK)) {
            for (col, item) in zip(0u16.., week) {
                canvas.draw_item(row, col, item, today);
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_title(&mut self, title: &str, can_prev: bool, can_next: bool) {
        let width = u16::try_from(Line::raw(title).width()).unwrap_or(u16::MAX);
        self.mvprint(
            TITLE_LINE,
            MAIN_WIDTH.saturating_sub(width) / 2,
            title,
            Some(TITLE_STYLE),
        );
        self.mvprint(TITLE_LINE, 0, PREV_ARROW, Some(nav_style(can_prev)));
        self.mvprint(
            TITLE_LINE,
            MAIN_WIDTH - 1,
            NEXT_ARROW,
            Some(nav_style(can_next)),
        );
    }

    // `row` 0 is the weekday header; the weeks follow it
    fn draw_item(&mut self, row: u16, col: u16, item: &CalendarItem, today: Date) {
        let (s, style) = if item.is_header() {
            (format!("{:^4}", item.text), WEEKDAY_STYLE)
        } else if item.selected && !item.other_month {
            (format!("[{:>2}]", item.text), item_style(item, today))
        } else {
            (format!(" {:>2} ", item.text), item_style(item, today))
        };
        self.mvprint(HEADER_LINE + row, DAY_WIDTH * col, s, Some(style));
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // grid's area, though we need to be sure that the Rect passed to
            // the Paragraph is entirely within the frame lest a panic result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}

fn nav_style(enabled: bool) -> Style {
    if enabled {
        nav::ENABLED_STYLE
    } else {
        nav::DISABLED_STYLE
    }
}

fn item_style(item: &CalendarItem, today: Date) -> Style {
    let style = if item.other_month {
        day::OTHER_MONTH_STYLE
    } else if item.disabled {
        day::DISABLED_STYLE
    } else if item.selected {
        day::SELECTED_STYLE
    } else {
        Style::new()
    };
    if item.date == Some(today) {
        style.add_modifier(day::TODAY_MODIFIER)
    } else {
        style
    }
}
