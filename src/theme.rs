use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) mod nav {
    use super::*;

    pub(crate) const ENABLED_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const DISABLED_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);
}

pub(crate) mod day {
    use super::*;

    pub(crate) const OTHER_MONTH_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const DISABLED_STYLE: Style = BASE_STYLE
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT);

    pub(crate) const SELECTED_STYLE: Style = BASE_STYLE
        .fg(Color::LightCyan)
        .add_modifier(Modifier::BOLD);

    pub(crate) const TODAY_MODIFIER: Modifier = Modifier::UNDERLINED;
}
