// File: ./src/source.rs
// Fetches the league's fixtures page and extracts raw fixture records.
use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{Fixture, RawFixture};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use scraper::{ElementRef, Html, Selector};

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";

// The fixture list markup: a known container, one <li> per fixture, the
// tracked slot right-aligned and the visiting slot left-aligned.
const CONTAINER: &str = "div#upcomingfixtures";
const LIST_ITEM: &str = "li";
const DATE_HEADING: &str = "h4";
const TEAM_SLOT: &str = "div.team.text-right span";
const OPPONENT_SLOT: &str = "div.team.right.text-left span";
const SCHEDULE_BLOCK: &str = "div.schedule";
const TIME_LABEL: &str = "span.match-time";

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector")
}

fn inner_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn text_of(item: ElementRef<'_>, css: &'static str, label: &'static str) -> Result<String> {
    item.select(&selector(css))
        .next()
        .map(inner_text)
        .ok_or(Error::MalformedFixture(label))
}

/// A schedule block lists several time labels per fixture. The first is the
/// league-wide kickoff marker shown on the page; the second carries the
/// actual match time for the listed pairing, so the second one wins.
fn scheduled_match_time(times: &[String]) -> Option<&String> {
    if times.len() < 2 {
        return None;
    }
    times.get(1)
}

/// Extract raw fixture records from the page markup.
///
/// A missing container or an empty list is an empty result, not an error.
/// A list item missing any expected sub-element aborts with
/// [`Error::MalformedFixture`].
pub fn parse_fixtures(html: &str) -> Result<Vec<RawFixture>> {
    let document = Html::parse_document(html);

    let Some(container) = document.select(&selector(CONTAINER)).next() else {
        log::warn!("No upcoming-fixtures container found on the page");
        return Ok(Vec::new());
    };

    let mut fixtures = Vec::new();
    for item in container.select(&selector(LIST_ITEM)) {
        let date = text_of(item, DATE_HEADING, "date heading")?;
        let team = text_of(item, TEAM_SLOT, "team label")?;
        let opponent = text_of(item, OPPONENT_SLOT, "opponent label")?;

        let schedule = item
            .select(&selector(SCHEDULE_BLOCK))
            .next()
            .ok_or(Error::MalformedFixture("schedule block"))?;
        let times: Vec<String> = schedule
            .select(&selector(TIME_LABEL))
            .map(inner_text)
            .collect();
        let time = scheduled_match_time(&times)
            .ok_or(Error::MalformedFixture("second match-time label"))?
            .clone();

        fixtures.push(RawFixture {
            team,
            opponent,
            date,
            time,
        });
    }

    Ok(fixtures)
}

/// Keep only fixtures involving `team` (exact, case-sensitive match) and
/// promote them. A team-slot match is a home fixture, an opponent-slot match
/// an away one; anything else is dropped.
pub fn filter_for_team(fixtures: &[RawFixture], team: &str) -> Result<Vec<Fixture>> {
    let mut matches = Vec::new();
    for raw in fixtures {
        if raw.team == team {
            matches.push(Fixture::from_raw(raw, true)?);
        } else if raw.opponent == team {
            matches.push(Fixture::from_raw(raw, false)?);
        } else {
            log::debug!("Skipping {} vs {}: does not involve {}", raw.team, raw.opponent, team);
        }
    }
    Ok(matches)
}

/// Fetches the fixtures page over HTTP and yields the tracked team's matches.
pub struct FixtureSource {
    client: reqwest::blocking::Client,
    url: String,
    team: String,
}

impl FixtureSource {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/text"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/text"));
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            url: config.fixtures_url.clone(),
            team: config.team.clone(),
        })
    }

    /// GET the fixtures page. No retry; a non-success status is an error.
    pub fn fetch_page(&self) -> Result<String> {
        log::info!("Fetching fixtures from {}", self.url);
        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::FetchStatus(status));
        }
        Ok(response.text()?)
    }

    /// Fetch, extract and filter in one pass.
    pub fn team_fixtures(&self) -> Result<Vec<Fixture>> {
        let page = self.fetch_page()?;
        let raw = parse_fixtures(&page)?;
        log::debug!("Extracted {} raw fixtures from the page", raw.len());
        filter_for_team(&raw, &self.team)
    }
}
