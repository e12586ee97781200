use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

/// Status of a match, as carried in the `<Time>` element.
///
/// The service uses a fixed vocabulary, plus a bare minute count while the
/// match is in play.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchStatus {
    NotStarted,
    /// In play, at the given minute of the match.
    Minute(u16),
    Halftime,
    Finished,
    /// Finished after extra time.
    FinishedAfterExtraTime,
    /// Finished after a penalty shoot-out.
    FinishedAfterPenalties,
    WaitingForPenalty,
    Cancelled,
    Postponed,
    Abandoned,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseStatusError;

impl FromStr for MatchStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Started" => Ok(MatchStatus::NotStarted),
            "Halftime" => Ok(MatchStatus::Halftime),
            "Finished" => Ok(MatchStatus::Finished),
            "Finished AET" => Ok(MatchStatus::FinishedAfterExtraTime),
            "Finished AP" => Ok(MatchStatus::FinishedAfterPenalties),
            "Waiting for Penalty" => Ok(MatchStatus::WaitingForPenalty),
            "Cancelled" => Ok(MatchStatus::Cancelled),
            "Postponed" => Ok(MatchStatus::Postponed),
            "Abandoned" => Ok(MatchStatus::Abandoned),
            minute => minute
                .trim()
                .parse::<u16>()
                .map(MatchStatus::Minute)
                .map_err(|_| ParseStatusError),
        }
    }
}

impl Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::NotStarted => write!(f, "Not Started"),
            MatchStatus::Minute(minute) => write!(f, "{minute}"),
            MatchStatus::Halftime => write!(f, "Halftime"),
            MatchStatus::Finished => write!(f, "Finished"),
            MatchStatus::FinishedAfterExtraTime => write!(f, "Finished AET"),
            MatchStatus::FinishedAfterPenalties => write!(f, "Finished AP"),
            MatchStatus::WaitingForPenalty => write!(f, "Waiting for Penalty"),
            MatchStatus::Cancelled => write!(f, "Cancelled"),
            MatchStatus::Postponed => write!(f, "Postponed"),
            MatchStatus::Abandoned => write!(f, "Abandoned"),
        }
    }
}

impl Serialize for MatchStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MatchStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!("unknown match status {s:?}")))
    }
}
