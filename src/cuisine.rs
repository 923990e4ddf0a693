//! Cuisine selector options.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One option of the cuisine selector.
///
/// `All` is the sentinel meaning "no cuisine constraint".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cuisine {
    #[default]
    All,
    Indian,
    Chinese,
    Italian,
    Japanese,
}

impl Cuisine {
    /// Every option, in selector order.
    pub const OPTIONS: [Cuisine; 5] = [
        Cuisine::All,
        Cuisine::Indian,
        Cuisine::Chinese,
        Cuisine::Italian,
        Cuisine::Japanese,
    ];

    /// The value matched against a restaurant's cuisine field.
    pub const fn value(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Indian => "Indian",
            Self::Chinese => "Chinese",
            Self::Italian => "Italian",
            Self::Japanese => "Japanese",
        }
    }

    /// Text shown in the selector.
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Cuisines",
            other => other.value(),
        }
    }

    #[inline]
    pub const fn is_all(self) -> bool {
        matches!(self, Self::All)
    }

    fn position(self) -> usize {
        Self::OPTIONS.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Next option, wrapping to `All` after the last.
    pub fn next(self) -> Self {
        Self::OPTIONS[(self.position() + 1) % Self::OPTIONS.len()]
    }

    /// Previous option, wrapping to the last before `All`.
    pub fn previous(self) -> Self {
        let len = Self::OPTIONS.len();
        Self::OPTIONS[(self.position() + len - 1) % len]
    }

    pub fn first() -> Self {
        Self::OPTIONS[0]
    }

    pub fn last() -> Self {
        Self::OPTIONS[Self::OPTIONS.len() - 1]
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Returned when a name matches no selector option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cuisine `{0}` (expected one of: All, Indian, Chinese, Italian, Japanese)")]
pub struct ParseCuisineError(pub String);

impl FromStr for Cuisine {
    type Err = ParseCuisineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::OPTIONS
            .into_iter()
            .find(|c| c.value().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseCuisineError(s.to_string()))
    }
}
