use std::fmt;
use std::str::FromStr;

const DEFAULT_LANGUAGE: &str = "en";

/// Short language tag such as `en`, `fr` or `zh-CN`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid language code: {0:?}")]
pub struct InvalidLanguageCode(pub String);

impl LanguageCode {
    pub fn parse(raw: &str) -> Result<Self, InvalidLanguageCode> {
        let trimmed = raw.trim();
        let invalid = || InvalidLanguageCode(raw.to_string());

        let (primary, region) = match trimmed.split_once(['-', '_']) {
            Some((primary, region)) => (primary, Some(region)),
            None => (trimmed, None),
        };

        if !(2..=3).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let mut code = primary.to_ascii_lowercase();
        if let Some(region) = region {
            if !(2..=4).contains(&region.len())
                || !region.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return Err(invalid());
            }
            code.push('-');
            code.push_str(region);
        }

        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary subtag, `zh` for `zh-CN`.
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// A bare tag matches any variant of its language; a tag with a region
    /// or script subtag only matches that exact variant.
    pub fn same_language(&self, other: &str) -> bool {
        match LanguageCode::parse(other) {
            Ok(other) if self.primary() == self.as_str() => self.primary() == other.primary(),
            Ok(other) => self.as_str().eq_ignore_ascii_case(other.as_str()),
            Err(_) => false,
        }
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self(DEFAULT_LANGUAGE.to_string())
    }
}

impl FromStr for LanguageCode {
    type Err = InvalidLanguageCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
