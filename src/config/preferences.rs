//! User preferences
//!
//! Language and theme are passed explicitly to whatever renders the lists.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferencesConfig {
    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the operating system
    #[default]
    System,
    Light,
    Dark,
}

impl Language {
    /// BCP 47 tag
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }
}
