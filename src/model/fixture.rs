// File: ./src/model/fixture.rs
use crate::error::{Error, Result};
use chrono::{Datelike, Local, NaiveDateTime, Weekday};
use std::fmt;

/// How far ahead to scan when resolving the implicit fixture year.
/// A day/month revisits every weekday within one full 28-year Gregorian
/// cycle, 29 February included.
const YEAR_SEARCH_WINDOW: i32 = 28;

/// Transient record as extracted from the fixture page, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFixture {
    pub team: String,
    pub opponent: String,
    pub date: String,
    pub time: String,
}

/// A scheduled match involving the tracked team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub team: String,
    pub opponent: String,
    /// True when the tracked team occupies the "team" (home) slot.
    pub home: bool,
    pub start: NaiveDateTime,
}

impl Fixture {
    /// Promote a raw record, parsing its date/time text.
    pub fn from_raw(raw: &RawFixture, home: bool) -> Result<Self> {
        Ok(Self {
            team: raw.team.clone(),
            opponent: raw.opponent.clone(),
            home,
            start: parse_start(&raw.date, &raw.time)?,
        })
    }

    /// Match title: the team slot leads for home fixtures, the opponent
    /// slot for away ones. Either way the tracked side prints first.
    pub fn title(&self) -> String {
        if self.home {
            format!("{} vs {}", self.team, self.opponent)
        } else {
            format!("{} vs {}", self.opponent, self.team)
        }
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {}",
            self.title(),
            self.start.format("%m/%d/%Y %I:%M %p")
        )
    }
}

/// Parse fixture date/time text of the form "Tuesday 14 May" + "19:45".
///
/// The page never prints a year. It is resolved to the first year, scanning
/// forward from the current one, in which the day/month lands on the named
/// weekday; the weekday acts as a checksum on the resolution.
pub fn parse_start(date: &str, time: &str) -> Result<NaiveDateTime> {
    let combined = format!("{} {}", date.trim(), time.trim());
    let parse_error = |reason: String| Error::DateParse {
        text: combined.clone(),
        reason,
    };

    let Some((weekday_text, rest)) = combined.split_once(' ') else {
        return Err(parse_error("expected 'Weekday DD Month HH:MM'".to_string()));
    };
    let weekday: Weekday = weekday_text
        .parse()
        .map_err(|_| parse_error(format!("'{weekday_text}' is not a weekday")))?;

    let this_year = Local::now().year();
    let mut last_error = None;
    for year in this_year..this_year + YEAR_SEARCH_WINDOW {
        match NaiveDateTime::parse_from_str(&format!("{rest} {year}"), "%d %B %H:%M %Y") {
            Ok(start) if start.weekday() == weekday => return Ok(start),
            Ok(_) => continue,
            // Keep scanning: "29 February" only parses in leap years.
            Err(e) => last_error = Some(e),
        }
    }

    Err(match last_error {
        Some(e) => parse_error(e.to_string()),
        None => parse_error(format!(
            "no year within {YEAR_SEARCH_WINDOW} years puts {rest} on a {weekday}"
        )),
    })
}
