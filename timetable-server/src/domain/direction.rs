//! Direction and event tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown direction tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction: {0:?}")]
pub struct InvalidDirection(pub String);

/// Travel direction a feed file is tagged with.
///
/// Publishers call these 下り (`kudari`, outward) and 上り (`nobori`,
/// inbound). Both the English and the romanized names are accepted when
/// parsing; the English name is used everywhere on output.
///
/// # Examples
///
/// ```
/// use timetable_server::domain::Direction;
///
/// assert_eq!("down".parse::<Direction>().unwrap(), Direction::Down);
/// assert_eq!("nobori".parse::<Direction>().unwrap(), Direction::Up);
/// assert!("sideways".parse::<Direction>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down,
    Up,
}

impl Direction {
    /// Canonical tag, also the first component of the index sort key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Up => "up",
        }
    }

    /// Parse a caller-supplied filter.
    ///
    /// Unknown values mean "no filter" rather than an error.
    pub fn parse_filter(s: Option<&str>) -> Option<Self> {
        s.and_then(|s| s.parse().ok())
    }
}

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "down" | "kudari" => Ok(Direction::Down),
            "up" | "nobori" => Ok(Direction::Up),
            _ => Err(InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a timetable cell records the train leaving or reaching a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Event {
    Departure,
    Arrival,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::Departure => "departure",
            Event::Arrival => "arrival",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("down".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("kudari".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("nobori".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!(" UP ".parse::<Direction>(), Ok(Direction::Up));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("".parse::<Direction>().is_err());
        assert!("both".parse::<Direction>().is_err());
        assert_eq!(
            "both".parse::<Direction>().unwrap_err().to_string(),
            "unknown direction: \"both\""
        );
    }

    #[test]
    fn filter_degrades_to_none() {
        assert_eq!(Direction::parse_filter(None), None);
        assert_eq!(Direction::parse_filter(Some("both")), None);
        assert_eq!(Direction::parse_filter(Some("up")), Some(Direction::Up));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), "\"down\"");
        assert_eq!(serde_json::to_string(&Event::Arrival).unwrap(), "\"arrival\"");
    }

    #[test]
    fn tag_ordering_as_strings() {
        assert!(Direction::Down.as_str() < Direction::Up.as_str());
        assert!(Event::Arrival.as_str() < Event::Departure.as_str());
    }
}
