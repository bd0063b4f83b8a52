//! UI strings in English and Simplified Chinese
//!
//! The language comes from the settings override when present, otherwise from
//! the usual locale environment variables. Any `zh*` locale picks Chinese.

use bevy::prelude::*;

#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    ChineseSimplified,
}

const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::ChineseSimplified => "zh-Hans",
        }
    }

    pub fn from_locale(locale: &str) -> Language {
        if locale.trim().to_lowercase().starts_with("zh") {
            Language::ChineseSimplified
        } else {
            Language::English
        }
    }

    /// Settings override first, then the first non-empty locale variable.
    pub fn resolve(preferred: Option<&str>) -> Language {
        if let Some(locale) = preferred.filter(|l| !l.trim().is_empty()) {
            return Language::from_locale(locale);
        }

        LOCALE_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
            .map(|value| Language::from_locale(&value))
            .unwrap_or_default()
    }

    /// Whether the text needs glyphs Bevy's built-in font lacks.
    pub fn needs_cjk_font(self) -> bool {
        matches!(self, Language::ChineseSimplified)
    }

    /// Language for in-window text: English unless a font that can draw this
    /// language has been configured.
    pub fn for_window(self, font_configured: bool) -> Language {
        if self.needs_cjk_font() && !font_configured {
            Language::English
        } else {
            self
        }
    }

    /// Look up a UI string. Unknown keys come back unchanged.
    pub fn text(self, key: &str) -> String {
        let table = match self {
            Language::English => EN,
            Language::ChineseSimplified => ZH_HANS,
        };
        table
            .iter()
            .chain(EN.iter())
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
            .unwrap_or_else(|| key.to_string())
    }

    /// Look up a string and substitute `{}` placeholders in order.
    pub fn format(self, key: &str, args: &[&dyn std::fmt::Display]) -> String {
        let mut out = self.text(key);
        for arg in args {
            if let Some(pos) = out.find("{}") {
                out.replace_range(pos..pos + 2, &arg.to_string());
            }
        }
        out
    }
}

const EN: &[(&str, &str)] = &[
    ("app.title", "Dice"),
    ("action.roll", "Roll"),
    ("status.rolling", "Rolling..."),
    ("status.result", "You rolled {}"),
    ("status.hint", "Press SPACE to roll"),
    ("cli.rolling", "Rolling:"),
    ("cli.result", "Result:"),
    ("cli.tally", "Tally:"),
];

const ZH_HANS: &[(&str, &str)] = &[
    ("app.title", "骰子"),
    ("action.roll", "摇一摇"),
    ("status.rolling", "摇骰中..."),
    ("status.result", "点数：{}"),
    ("status.hint", "按空格键掷骰子"),
    ("cli.rolling", "掷骰："),
    ("cli.result", "结果："),
    ("cli.tally", "统计："),
];
