use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

/// Key bindings shown in the popup, as (keys, action) pairs
static BINDINGS: &[(&str, &str)] = &[
    ("h, p, LEFT, PAGE UP", "Previous month"),
    ("l, n, RIGHT, PAGE DOWN", "Next month"),
    ("0, HOME", "Jump to today"),
    ("L", "Switch language"),
    ("?", "Show this help"),
    ("q, ESC", "Quit"),
];

static DISMISS: &str = "Press the Any Key to dismiss.";

/// Columns between the longest key list and its action
const KEY_GUTTER: usize = 4;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Help {
    fn text() -> Text<'static> {
        let keys_width = BINDINGS
            .iter()
            .map(|(keys, _)| keys.len())
            .max()
            .unwrap_or_default()
            + KEY_GUTTER;
        let mut lines = BINDINGS
            .iter()
            .map(|(keys, action)| Line::raw(format!("{keys:keys_width$}{action}")))
            .collect::<Vec<_>>();
        lines.push(Line::raw(""));
        lines.push(Line::raw(DISMISS));
        Text::from(lines)
    }
}

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Self::text();
        // Two extra rows and columns for the border
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.width);
        let [popup] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [popup] = Layout::vertical([height]).flex(Flex::Center).areas(popup);
        // Leave a blank column on either side of the border when there's room
        let padded = Rect {
            x: popup.x.saturating_sub(1),
            y: popup.y,
            width: popup.width.saturating_add(2),
            height: popup.height,
        }
        .intersection(area);
        Clear.render(padded, buf);
        Block::new().style(self.0).render(padded, buf);
        Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Commands ")
                    .title_alignment(Alignment::Center),
            )
            .style(self.0)
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_alignment() {
        let text = Help::text();
        assert_eq!(text.height(), BINDINGS.len() + 2);
        assert_eq!(
            text.lines[0].to_string(),
            "h, p, LEFT, PAGE UP       Previous month"
        );
        assert_eq!(text.lines[3].to_string(), "L                         Switch language");
    }

    #[test]
    fn test_render_in_tiny_area() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        Help(Style::new()).render(area, &mut buffer);
        assert_eq!(buffer.area, area);
    }
}
