//! Wire models for the service's XML payloads.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::MatchStatus;

/// A competition published by the service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct League {
    #[serde(rename = "Id")]
    pub id: i32,

    #[serde(rename = "Name")]
    pub name: String,

    /// Date of the most recent match played in the league.
    #[serde(rename = "LatestMatch")]
    pub latest_match: DateTime<FixedOffset>,
}

/// A single fixture, scheduled or played.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Match {
    #[serde(rename = "Id")]
    pub id: i32,

    #[serde(rename = "Date")]
    pub start_date: DateTime<FixedOffset>,

    #[serde(rename = "Round", default)]
    pub round: i32,

    #[serde(rename = "HomeTeam")]
    pub home_team_name: String,

    #[serde(rename = "HomeTeam_Id")]
    pub home_team_id: i32,

    // Goal elements are absent until the match has kicked off.
    #[serde(rename = "HomeGoals", default)]
    pub home_goals: i32,

    #[serde(rename = "AwayTeam")]
    pub away_team_name: String,

    #[serde(rename = "AwayTeam_Id")]
    pub away_team_id: i32,

    #[serde(rename = "AwayGoals", default)]
    pub away_goals: i32,

    #[serde(rename = "Time")]
    pub status: MatchStatus,
}

/// A club taking part in matches.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Team {
    #[serde(rename = "Team_Id")]
    pub id: i32,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Country")]
    pub country: String,

    /// Wikipedia page for the club, if the service has one.
    #[serde(rename = "WIKILink", default)]
    pub wiki_link: Option<String>,
}

/// Parse target for the response envelope. The service populates only the
/// sequence relevant to the invoked operation; the others stay empty. The
/// trailing `<AccountInformation>` element is ignored.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct XmlRoot {
    #[serde(rename = "League", default)]
    pub leagues: Vec<League>,

    #[serde(rename = "Match", default)]
    pub matches: Vec<Match>,

    #[serde(rename = "Team", default)]
    pub teams: Vec<Team>,
}
