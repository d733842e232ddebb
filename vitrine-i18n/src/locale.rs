//! Locale tags and language negotiation
//!
//! Turns a caller-supplied preference (an `Accept-Language` value, a cookie
//! value, a bare two-letter code) into one of the supported languages. The
//! resolver and the store take the result as a plain string.

use crate::{I18nError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Fallback language used when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A locale (language + optional script and region).
///
/// ```
/// use vitrine_i18n::Locale;
///
/// let am = Locale::parse("am-ET").unwrap();
/// assert_eq!(am.language, "am");
/// assert_eq!(am.tag(), "am-ET");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    /// ISO 639 language code, lowercase
    pub language: String,
    /// ISO 15924 script, title case
    pub script: Option<String>,
    /// ISO 3166-1 or UN M.49 region, uppercase
    pub region: Option<String>,
}

impl Locale {
    /// A language-only locale.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into().to_ascii_lowercase(),
            script: None,
            region: None,
        }
    }

    pub fn en() -> Self {
        Self::new("en")
    }

    /// Parse a BCP 47 style tag (`am`, `en-US`, `zh_Hant_TW`).
    ///
    /// Subtags that are neither script nor region (variants, extensions)
    /// are ignored.
    pub fn parse(tag: &str) -> Result<Self> {
        let mut parts = tag.trim().split(['-', '_']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();

        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(I18nError::InvalidLocale(tag.to_string()));
        }

        let mut locale = Self::new(language);
        for part in parts {
            let alpha = part.chars().all(|c| c.is_ascii_alphabetic());
            match part.len() {
                4 if alpha && locale.script.is_none() => {
                    let (head, tail) = part.split_at(1);
                    locale.script = Some(head.to_ascii_uppercase() + &tail.to_ascii_lowercase());
                }
                2 if alpha => locale.region = Some(part.to_ascii_uppercase()),
                3 if part.chars().all(|c| c.is_ascii_digit()) => {
                    locale.region = Some(part.to_string())
                }
                _ => {}
            }
        }

        Ok(locale)
    }

    /// The normalized tag, e.g. `zh-Hant-TW`.
    pub fn tag(&self) -> String {
        let mut tag = self.language.clone();
        for subtag in [&self.script, &self.region].into_iter().flatten() {
            tag.push('-');
            tag.push_str(subtag);
        }
        tag
    }

    /// Match score against a requested locale (higher is better).
    ///
    /// - 100: identical
    /// - 10 for a shared language, +40 for a shared region, +15 for a shared script
    /// - 0: different language
    pub fn match_score(&self, other: &Locale) -> u32 {
        if self.language != other.language {
            return 0;
        }
        if self == other {
            return 100;
        }

        let mut score = 10;
        if self.region.is_some() && self.region == other.region {
            score += 40;
        }
        if self.script.is_some() && self.script == other.script {
            score += 15;
        }
        score
    }
}

/// Normalize a tag the way documents are keyed (`en-us` -> `en-US`).
///
/// Input that does not parse is returned trimmed and otherwise unchanged.
pub(crate) fn normalize_tag(tag: &str) -> String {
    Locale::parse(tag)
        .map(|locale| locale.tag())
        .unwrap_or_else(|_| tag.trim().to_string())
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Locale::parse(s)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

#[derive(Debug)]
struct Preference {
    locale: Locale,
    quality: f32,
    position: usize,
}

impl Preference {
    fn order(&self, other: &Self) -> Ordering {
        other
            .quality
            .partial_cmp(&self.quality)
            .unwrap_or(Ordering::Equal)
            .then(self.position.cmp(&other.position))
    }
}

/// Parse an `Accept-Language` style preference list.
///
/// Returns locales sorted by quality (highest first, ties in header order).
/// Wildcards, malformed tags and `q=0` entries are dropped.
///
/// ```
/// use vitrine_i18n::parse_accept_language;
///
/// let locales = parse_accept_language("am-ET,am;q=0.9,en;q=0.8,*;q=0.1");
/// let tags: Vec<String> = locales.iter().map(|l| l.tag()).collect();
/// assert_eq!(tags, ["am-ET", "am", "en"]);
/// ```
pub fn parse_accept_language(header: &str) -> Vec<Locale> {
    let mut preferences: Vec<Preference> = header
        .split(',')
        .enumerate()
        .filter_map(|(position, part)| {
            let mut pieces = part.split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }

            let quality = pieces
                .find_map(|p| p.trim().strip_prefix("q="))
                .map_or(Some(1.0), |q| q.trim().parse::<f32>().ok())?;
            if quality <= 0.0 {
                return None;
            }

            let locale = Locale::parse(tag).ok()?;
            Some(Preference {
                locale,
                quality,
                position,
            })
        })
        .collect();

    preferences.sort_by(|a, b| a.order(b));
    preferences.into_iter().map(|p| p.locale).collect()
}

/// Pick the best available locale for the requested ones.
///
/// Requested locales are tried in order; each is matched exactly first,
/// then by best score among available locales sharing its language.
/// Falls back to `default` when nothing matches.
pub fn negotiate_locale<'a>(
    requested: &[Locale],
    available: &'a [Locale],
    default: &'a Locale,
) -> &'a Locale {
    for wanted in requested {
        if let Some(exact) = available.iter().find(|a| *a == wanted) {
            return exact;
        }

        let best = available
            .iter()
            .map(|a| (a, a.match_score(wanted)))
            .filter(|(_, score)| *score > 0)
            .max_by_key(|(_, score)| *score);

        if let Some((locale, _)) = best {
            return locale;
        }
    }

    default
}
