//! Display languages supported by the page.

use std::fmt;

use unic_langid::LanguageIdentifier;

/// Storage key under which the chosen language code is persisted.
pub const PREFERENCE_KEY: &str = "preferred-language";

/// One of the two languages the page is written in. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Nl,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Nl];

    /// Short code used for `data-lang`, `<html lang>` and the stored preference.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Nl => "nl",
        }
    }

    /// Parse a language code. Unknown codes yield `None` so callers can leave state alone.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Language::En),
            "nl" => Some(Language::Nl),
            _ => None,
        }
    }

    /// Label shown on the language selector button.
    pub fn button_label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Nl => "NL",
        }
    }

    pub fn langid(self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// CSS class list for a language selector button.
pub fn button_class(button: Language, active: Language) -> &'static str {
    if button == active {
        "lang-btn active"
    } else {
        "lang-btn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_parse() {
        for lang in Language::ALL {
            assert_eq!(Language::parse(lang.code()), Some(lang));
        }
    }

    #[test]
    fn unknown_codes_are_ignored() {
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::parse(""), None);
        assert_eq!(Language::parse("EN"), None);
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn only_matching_button_is_active() {
        assert_eq!(button_class(Language::Nl, Language::Nl), "lang-btn active");
        assert_eq!(button_class(Language::En, Language::Nl), "lang-btn");
    }

    #[test]
    fn langid_matches_code() {
        assert_eq!(Language::Nl.langid().to_string(), "nl");
    }
}
