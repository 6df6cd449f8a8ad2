// ABOUTME: Fixed color palette shared by tasks and notes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown color '{0}'")]
pub struct UnknownColor(pub String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Mist,
    Sage,
    Blush,
    Sand,
    Sky,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Mist,
        Color::Sage,
        Color::Blush,
        Color::Sand,
        Color::Sky,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Mist => "mist",
            Color::Sage => "sage",
            Color::Blush => "blush",
            Color::Sand => "sand",
            Color::Sky => "sky",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_mist() {
        assert_eq!(Color::default(), Color::Mist);
    }

    #[test]
    fn test_as_str_round_trips_through_from_str() {
        for color in Color::ALL {
            assert_eq!(color.as_str().parse::<Color>().unwrap(), color);
        }
    }

    #[test]
    fn test_unknown_color_rejected() {
        assert_eq!(
            "crimson".parse::<Color>(),
            Err(UnknownColor("crimson".to_string()))
        );
        assert!(serde_json::from_str::<Color>("\"Sage\"").is_err());
    }
}
