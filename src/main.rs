mod app;
mod help;
mod theme;
mod view;
mod widget;
use crate::app::App;
use crate::view::MonthView;
use anyhow::Context;
use daygrid::{CalendarContext, Lang, Locale};
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use time::{format_description::BorrowedFormatItem, macros::format_description, Date, OffsetDateTime};

static YMD_FMT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct RunOptions {
    date: Option<Date>,
    lang: Lang,
    min: Option<Date>,
    max: Option<Date>,
    log_file: Option<PathBuf>,
}

impl RunOptions {
    fn context(&self, today: Date) -> CalendarContext {
        let mut context = CalendarContext::new(self.date.unwrap_or(today));
        if let Some(min) = self.min {
            context = context.min(min);
        }
        if let Some(max) = self.max {
            context = context.max(max);
        }
        context
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(RunOptions),
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = RunOptions::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('l') | Arg::Long("lang") => opts.lang = parser.value()?.parse()?,
                Arg::Long("min") => opts.min = Some(parser.value()?.parse_with(parse_ymd)?),
                Arg::Long("max") => opts.max = Some(parser.value()?.parse_with(parse_ymd)?),
                Arg::Long("log-file") => opts.log_file = Some(parser.value()?.into()),
                Arg::Value(value) if opts.date.is_none() => {
                    opts.date = Some(value.parse_with(parse_ymd)?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => {
                let _logger = init_logging(&opts)?;
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let context = opts.context(today);
                if context.min > context.max {
                    log::warn!(
                        "--min {} is after --max {}; no date will be selectable",
                        context.min,
                        context.max
                    );
                }
                let view = MonthView::new(today, context, Locale::new(opts.lang));
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(view)
                        .run(terminal)
                        .context("failed to run month picker")
                })
            }
            Command::Help => {
                println!("Usage: daygrid [OPTIONS] [YYYY-MM-DD]");
                println!();
                println!("Terminal month picker with localized names and selectable date bounds");
                println!();
                println!("Options:");
                println!("  -l, --lang <TAG>        Language for weekday and month names (en, id)");
                println!("      --min <YYYY-MM-DD>  Earliest selectable date");
                println!("      --max <YYYY-MM-DD>  Latest selectable date");
                println!("      --log-file <PATH>   Write log messages to this file");
                println!("  -h, --help              Display this help message and exit");
                println!("  -V, --version           Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn parse_ymd(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s, &YMD_FMT)
}

// Log output would clobber the terminal UI, so nothing is logged unless a log
// file is given.
fn init_logging(opts: &RunOptions) -> anyhow::Result<Option<LoggerHandle>> {
    let Some(ref log_file) = opts.log_file else {
        return Ok(None);
    };
    let handle = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)
        .context("invalid log specification")?
        .log_to_file(FileSpec::try_from(log_file).context("invalid log file path")?)
        .start()
        .context("failed to start logger")?;
    log::info!(
        "Starting {} {} with language {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        opts.lang
    );
    Ok(Some(handle))
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn parse_args(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_args(args.iter().copied()))
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse_args(&[]).ok(), Some(Command::Run(RunOptions::default())));
    }

    #[test]
    fn test_all_options() {
        let cmd = parse_args(&[
            "--lang",
            "id-ID",
            "--min",
            "2022-05-09",
            "--max=2022-06-15",
            "--log-file",
            "daygrid.log",
            "2022-05-13",
        ]);
        assert_eq!(
            cmd.ok(),
            Some(Command::Run(RunOptions {
                date: Some(date!(2022 - 05 - 13)),
                lang: Lang::Id,
                min: Some(date!(2022 - 05 - 09)),
                max: Some(date!(2022 - 06 - 15)),
                log_file: Some(PathBuf::from("daygrid.log")),
            }))
        );
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse_args(&["-h"]).ok(), Some(Command::Help));
        assert_eq!(parse_args(&["--version"]).ok(), Some(Command::Version));
    }

    #[test]
    fn test_bad_args() {
        assert!(parse_args(&["--lang", "fr"]).is_err());
        assert!(parse_args(&["--min", "2022-13-01"]).is_err());
        assert!(parse_args(&["2022-05-13", "2022-05-14"]).is_err());
        assert!(parse_args(&["--frobnicate"]).is_err());
    }

    #[test]
    fn test_context_defaults_to_today() {
        let opts = RunOptions {
            max: Some(date!(2022 - 12 - 31)),
            ..RunOptions::default()
        };
        let ctx = opts.context(date!(2022 - 05 - 13));
        assert_eq!(ctx.cursor, date!(2022 - 05 - 13));
        assert_eq!(ctx.min, Date::MIN);
        assert_eq!(ctx.max, date!(2022 - 12 - 31));
    }
}
