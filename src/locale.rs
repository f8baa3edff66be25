use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::{Date, Month, Weekday};

/// A language in which weekday and month names can be displayed
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Lang {
    #[default]
    En,
    Id,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Id];

    /// The canonical language tag, as accepted by [`Lang::from_str()`]
    pub fn tag(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Id => "id",
        }
    }

    /// The language after this one in [`Lang::ALL`], wrapping around
    pub fn next(self) -> Lang {
        match self {
            Lang::En => Lang::Id,
            Lang::Id => Lang::En,
        }
    }

    fn weekday_names(self) -> &'static [&'static str; 7] {
        match self {
            Lang::En => &["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
            Lang::Id => &["Sen", "Sel", "Rab", "Kam", "Jum", "Sab", "Min"],
        }
    }

    fn month_names(self) -> &'static [&'static str; 12] {
        match self {
            Lang::En => &[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            Lang::Id => &[
                "Januari",
                "Februari",
                "Maret",
                "April",
                "Mei",
                "Juni",
                "Juli",
                "Agustus",
                "September",
                "Oktober",
                "November",
                "Desember",
            ],
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Lang {
    type Err = UnknownLangError;

    // Only the primary subtag matters: "en-US" and "en_GB" are both English.
    fn from_str(s: &str) -> Result<Lang, UnknownLangError> {
        let primary = s.split(['-', '_']).next().unwrap_or_default();
        Lang::ALL
            .into_iter()
            .find(|lang| lang.tag().eq_ignore_ascii_case(primary))
            .ok_or_else(|| UnknownLangError(s.to_owned()))
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unsupported language tag: {0:?}")]
pub struct UnknownLangError(String);

impl UnknownLangError {
    /// The tag that was rejected
    pub fn tag(&self) -> &str {
        &self.0
    }
}

/// The active display language, consulted by
/// [`DateAdapter`](crate::calendar::DateAdapter) whenever it builds names or
/// titles.
///
/// A `Locale` starts out in English.  Changing it only affects queries made
/// afterwards; items that were already produced are left as they are.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Locale {
    lang: Lang,
}

impl Locale {
    pub fn new(lang: Lang) -> Locale {
        Locale { lang }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Switch to the language named by `tag`.
    ///
    /// If `tag` does not name a supported language, the current language is
    /// kept and an error is returned.
    pub fn set_lang(&mut self, tag: &str) -> Result<(), UnknownLangError> {
        match tag.parse::<Lang>() {
            Ok(lang) => {
                log::debug!("Switching display language from {} to {lang}", self.lang);
                self.lang = lang;
                Ok(())
            }
            Err(e) => {
                log::warn!("{e}; keeping {}", self.lang);
                Err(e)
            }
        }
    }

    /// The grid always starts its weeks on Monday, whatever the language.
    pub fn first_weekday(&self) -> Weekday {
        Weekday::Monday
    }

    pub fn weekday_abbrev(&self, wd: Weekday) -> &'static str {
        self.lang.weekday_names()[usize::from(wd.number_days_from_monday())]
    }

    /// Look up a weekday abbreviation by its Monday-first index (0 = Monday).
    /// Returns `None` for indices past Sunday.
    pub fn weekday_abbrev_at(&self, index: usize) -> Option<&'static str> {
        self.lang.weekday_names().get(index).copied()
    }

    pub fn month_name(&self, month: Month) -> &'static str {
        self.lang.month_names()[usize::from(u8::from(month) - 1)]
    }

    /// Title for the month containing `date`, e.g. "May 2022"
    pub fn month_year_title(&self, date: Date) -> String {
        format!("{} {}", self.month_name(date.month()), date.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse_lang() {
        assert_eq!("en".parse::<Lang>(), Ok(Lang::En));
        assert_eq!("EN".parse::<Lang>(), Ok(Lang::En));
        assert_eq!("en-US".parse::<Lang>(), Ok(Lang::En));
        assert_eq!("id".parse::<Lang>(), Ok(Lang::Id));
        assert_eq!("id_ID".parse::<Lang>(), Ok(Lang::Id));
    }

    #[test]
    fn test_parse_unknown_lang() {
        let e = "fr-FR".parse::<Lang>().unwrap_err();
        assert_eq!(e.tag(), "fr-FR");
        assert_eq!(e.to_string(), r#"unsupported language tag: "fr-FR""#);
        assert!("".parse::<Lang>().is_err());
        assert!("eng".parse::<Lang>().is_err());
    }

    #[test]
    fn test_default_is_english() {
        let locale = Locale::default();
        assert_eq!(locale.lang(), Lang::En);
        assert_eq!(locale.month_year_title(date!(2022 - 05 - 13)), "May 2022");
    }

    #[test]
    fn test_set_lang() {
        let mut locale = Locale::default();
        assert_eq!(locale.set_lang("id"), Ok(()));
        assert_eq!(locale.lang(), Lang::Id);
        assert_eq!(locale.month_year_title(date!(2022 - 05 - 13)), "Mei 2022");
    }

    #[test]
    fn test_set_unknown_lang_keeps_previous() {
        let mut locale = Locale::new(Lang::Id);
        assert!(locale.set_lang("xx").is_err());
        assert_eq!(locale.lang(), Lang::Id);
    }

    #[test]
    fn test_weekday_abbrevs() {
        let locale = Locale::new(Lang::Id);
        assert_eq!(locale.weekday_abbrev(Weekday::Monday), "Sen");
        assert_eq!(locale.weekday_abbrev(Weekday::Sunday), "Min");
        assert_eq!(locale.weekday_abbrev_at(2), Some("Rab"));
        assert_eq!(locale.weekday_abbrev_at(7), None);
        let locale = Locale::default();
        assert_eq!(locale.weekday_abbrev(Weekday::Thursday), "Th");
        assert_eq!(locale.weekday_abbrev_at(6), Some("Su"));
    }

    #[test]
    fn test_month_names() {
        let locale = Locale::new(Lang::Id);
        assert_eq!(locale.month_name(Month::January), "Januari");
        assert_eq!(locale.month_name(Month::August), "Agustus");
        assert_eq!(locale.month_name(Month::December), "Desember");
        let locale = Locale::default();
        assert_eq!(locale.month_name(Month::September), "September");
    }

    #[test]
    fn test_title_negative_year() {
        let locale = Locale::default();
        let ides = Date::from_calendar_date(-44, Month::March, 15).unwrap();
        assert_eq!(locale.month_year_title(ides), "March -44");
    }

    #[test]
    fn test_lang_cycle() {
        assert_eq!(Lang::En.next(), Lang::Id);
        assert_eq!(Lang::Id.next(), Lang::En);
        assert_eq!(Lang::Id.to_string(), "id");
    }
}
