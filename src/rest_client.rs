use std::time::Instant;

use chrono::{DateTime, TimeZone};
use chrono_tz::CET;
use tracing::log;

use crate::models_external::{League, Match, Team, XmlRoot};

/// Base URL of the demo service instance.
pub const DEMO_URL: &str = "http://www.xmlsoccer.com/FootballDataDemo.asmx";
/// Base URL of the full access service instance.
pub const FULL_URL: &str = "http://www.xmlsoccer.com/FootballData.asmx";

/// Layout of the date-interval request parameters, in CET local time.
const DATE_PARAM_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client was constructed without an API key.
    #[error("ApiKey is required")]
    MissingApiKey,

    /// The request could not be sent, or the response body not read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not a well-formed envelope document.
    #[error("malformed response: {0}")]
    Xml(#[from] serde_xml_rs::Error),
}

/// Client for the football data web service.
///
/// Every operation performs exactly one `POST {base_url}/{OperationName}`
/// round trip with a form-encoded body and parses the XML response. There is
/// no caching and no retrying; errors surface to the caller unchanged.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Client {
        Client::with_http_client(base_url, api_key, reqwest::Client::new())
    }

    /// Client against the demo service instance.
    pub fn demo(api_key: impl Into<String>) -> Client {
        Client::new(DEMO_URL, api_key)
    }

    /// Client against the full access service instance.
    pub fn full_access(api_key: impl Into<String>) -> Client {
        Client::new(FULL_URL, api_key)
    }

    /// Client with a caller-supplied transport, e.g. to set timeouts or a
    /// proxy.
    pub fn with_http_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        http: reqwest::Client,
    ) -> Client {
        Client {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http,
        }
    }

    /// All leagues published by the service.
    pub async fn get_all_leagues(&self) -> Result<Vec<League>, Error> {
        let root = self.invoke_service("GetAllLeagues", vec![]).await?;
        Ok(root.leagues)
    }

    /// All fixtures between `start` and `end`. The interval bounds may be in
    /// any timezone; they are sent to the service in CET.
    pub async fn get_fixtures_by_date_interval<Tz: TimeZone>(
        &self,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> Result<Vec<Match>, Error> {
        let root = self
            .invoke_service(
                "GetFixturesByDateInterval",
                vec![
                    ("startDateString", format_cet(start)),
                    ("endDateString", format_cet(end)),
                ],
            )
            .await?;
        Ok(root.matches)
    }

    /// All fixtures for `league` between `start` and `end`. The league is
    /// given either as its numeric id or its full name.
    pub async fn get_fixtures_by_date_interval_and_league<Tz: TimeZone>(
        &self,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
        league: &str,
    ) -> Result<Vec<Match>, Error> {
        let root = self
            .invoke_service(
                "GetFixturesByDateIntervalAndLeague",
                vec![
                    ("startDateString", format_cet(start)),
                    ("endDateString", format_cet(end)),
                    ("league", league.to_string()),
                ],
            )
            .await?;
        Ok(root.matches)
    }

    /// All fixtures for `league` in `season`. The season is the 4-digit code
    /// pairing the two-digit start and end years, e.g. "1415" for 2014-2015;
    /// it is passed through to the service unvalidated.
    pub async fn get_fixtures_by_league_and_season(
        &self,
        league: &str,
        season: &str,
    ) -> Result<Vec<Match>, Error> {
        let root = self
            .invoke_service(
                "GetFixturesByLeagueAndSeason",
                vec![
                    ("league", league.to_string()),
                    ("seasonDateString", season.to_string()),
                ],
            )
            .await?;
        Ok(root.matches)
    }

    /// All teams taking part in `league` in `season`.
    pub async fn get_all_teams_by_league_and_season(
        &self,
        league: &str,
        season: &str,
    ) -> Result<Vec<Team>, Error> {
        let root = self
            .invoke_service(
                "GetAllTeamsByLeagueAndSeason",
                vec![
                    ("league", league.to_string()),
                    ("seasonDateString", season.to_string()),
                ],
            )
            .await?;
        Ok(root.teams)
    }

    async fn invoke_service(
        &self,
        operation: &str,
        mut form: Vec<(&str, String)>,
    ) -> Result<XmlRoot, Error> {
        if self.api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }
        form.push(("ApiKey", self.api_key.clone()));

        let url = format!("{}/{}", self.base_url, operation);
        let before = Instant::now();
        let rsp = self.http.post(&url).form(&form).send().await?;
        let body = rsp.text().await?;
        log::info!("[API] Call {url} {:.2?}", before.elapsed());

        Ok(serde_xml_rs::from_str(body.trim())?)
    }
}

fn format_cet<Tz: TimeZone>(date_time: &DateTime<Tz>) -> String {
    date_time
        .with_timezone(&CET)
        .format(DATE_PARAM_FORMAT)
        .to_string()
}
