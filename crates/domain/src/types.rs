// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Kurdish.
    Ku,
    /// Arabic.
    Ar,
    /// Persian.
    Fa,
}

impl Language {
    /// All languages, in storage order.
    pub const ALL: [Self; 4] = [Self::En, Self::Ku, Self::Ar, Self::Fa];

    /// Returns the language code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ku => "ku",
            Self::Ar => "ar",
            Self::Fa => "fa",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::En => 0,
            Self::Ku => 1,
            Self::Ar => 2,
            Self::Fa => 3,
        }
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "ku" => Ok(Self::Ku),
            "ar" => Ok(Self::Ar),
            "fa" => Ok(Self::Fa),
            _ => Err(DomainError::InvalidLanguage(s.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A geo-cultural region of Kurdistan, or the `all` wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Southern Kurdistan.
    Bashur,
    /// Northern Kurdistan.
    Bakur,
    /// Eastern Kurdistan.
    Rojhelat,
    /// Western Kurdistan.
    Rojava,
    /// Observed in every region.
    All,
}

impl Region {
    /// Returns the region name as stored.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bashur => "bashur",
            Self::Bakur => "bakur",
            Self::Rojhelat => "rojhelat",
            Self::Rojava => "rojava",
            Self::All => "all",
        }
    }

    /// Returns whether a record tagged with this region satisfies a
    /// request for `requested`.
    ///
    /// A record tagged `all` satisfies every request. A request for `all`
    /// is only satisfied by records tagged `all`.
    #[must_use]
    pub fn satisfies(self, requested: Self) -> bool {
        self == requested || self == Self::All
    }
}

impl FromStr for Region {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bashur" => Ok(Self::Bashur),
            "bakur" => Ok(Self::Bakur),
            "rojhelat" => Ok(Self::Rojhelat),
            "rojava" => Ok(Self::Rojava),
            "all" => Ok(Self::All),
            _ => Err(DomainError::InvalidRegion(s.to_string())),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification of a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayType {
    Historical,
    Political,
    Commemoration,
    Cultural,
    Religious,
    Official,
}

impl HolidayType {
    /// Returns the type name as stored.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Historical => "historical",
            Self::Political => "political",
            Self::Commemoration => "commemoration",
            Self::Cultural => "cultural",
            Self::Religious => "religious",
            Self::Official => "official",
        }
    }
}

impl FromStr for HolidayType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "historical" => Ok(Self::Historical),
            "political" => Ok(Self::Political),
            "commemoration" => Ok(Self::Commemoration),
            "cultural" => Ok(Self::Cultural),
            "religious" => Ok(Self::Religious),
            "official" => Ok(Self::Official),
            _ => Err(DomainError::InvalidHolidayType(s.to_string())),
        }
    }
}

impl std::fmt::Display for HolidayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Text carried in every supported language.
///
/// The shape is fixed by [`Language`]; a language without text holds an
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LocalizedText {
    values: [String; 4],
}

impl LocalizedText {
    /// Creates localized text from one value per language.
    #[must_use]
    pub const fn new(en: String, ku: String, ar: String, fa: String) -> Self {
        Self {
            values: [en, ku, ar, fa],
        }
    }

    /// Sets the text for one language.
    #[must_use]
    pub fn with(mut self, language: Language, text: impl Into<String>) -> Self {
        self.values[language.index()] = text.into();
        self
    }

    /// Returns the text for a language, possibly empty.
    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        &self.values[language.index()]
    }

    /// Returns the text for a language, treating empty text as absent.
    #[must_use]
    pub fn non_empty(&self, language: Language) -> Option<&str> {
        let text: &str = self.get(language);
        if text.is_empty() { None } else { Some(text) }
    }

    /// Returns the first language with no text, if any.
    #[must_use]
    pub fn first_missing(&self) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|language| self.get(*language).is_empty())
    }
}
