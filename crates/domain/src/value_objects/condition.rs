//! Weather condition categories
//!
//! OpenWeatherMap condition codes are an open enumeration; only the codes
//! the calendar decorates are mapped, everything else is `Other`.

use serde::{Deserialize, Serialize};

/// Condition category derived from an OpenWeatherMap condition code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    /// Light or moderate rain (codes 500, 501)
    Rain,
    /// Clear sky (code 800)
    Clear,
    /// Few to overcast clouds (codes 801-804)
    Clouds,
    /// Any other condition code
    Other,
}

impl ConditionKind {
    /// Categorize an OpenWeatherMap condition code
    #[must_use]
    pub const fn from_code(code: u32) -> Self {
        match code {
            500 | 501 => Self::Rain,
            800 => Self::Clear,
            801..=804 => Self::Clouds,
            _ => Self::Other,
        }
    }

    /// Emoji prefix used in event summaries
    ///
    /// Unmapped categories decorate with nothing rather than failing.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Rain => "🌧️",
            Self::Clear => "☀️",
            Self::Clouds => "☁️",
            Self::Other => "",
        }
    }
}

/// Emoji for a raw condition code
#[must_use]
pub const fn emoji_for(code: u32) -> &'static str {
    ConditionKind::from_code(code).emoji()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rain_codes() {
        assert_eq!(ConditionKind::from_code(500), ConditionKind::Rain);
        assert_eq!(ConditionKind::from_code(501), ConditionKind::Rain);
    }

    #[test]
    fn clear_code() {
        assert_eq!(ConditionKind::from_code(800), ConditionKind::Clear);
    }

    #[test]
    fn cloud_codes() {
        for code in 801..=804 {
            assert_eq!(ConditionKind::from_code(code), ConditionKind::Clouds);
        }
    }

    #[test]
    fn unmapped_codes_are_other() {
        // Heavy rain (502) and snow (600) sit outside the mapped set
        assert_eq!(ConditionKind::from_code(502), ConditionKind::Other);
        assert_eq!(ConditionKind::from_code(600), ConditionKind::Other);
        assert_eq!(ConditionKind::from_code(0), ConditionKind::Other);
    }

    #[test]
    fn emoji_mapping() {
        assert_eq!(ConditionKind::Rain.emoji(), "🌧️");
        assert_eq!(ConditionKind::Clear.emoji(), "☀️");
        assert_eq!(ConditionKind::Clouds.emoji(), "☁️");
        assert_eq!(ConditionKind::Other.emoji(), "");
    }

    #[test]
    fn emoji_for_unknown_code_is_empty_not_error() {
        assert_eq!(emoji_for(9999), "");
    }
}
