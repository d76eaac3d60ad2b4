// File: ./src/export.rs
// Turns fixtures into an iCalendar document and writes it to disk.
use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::Fixture;
use chrono::Duration;
use icalendar::{Component, Event, EventLike};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

pub const CALENDAR_DIR: &str = "MyCalendar";
pub const CALENDAR_FILE: &str = "MyCalendar.ics";

/// Calendar slot reserved per match. Matches run longer; the event only
/// marks the start.
const MATCH_SLOT_MINUTES: i64 = 30;

/// An iCalendar document plus the venue text shared by all its events.
pub struct FixtureCalendar {
    prodid: String,
    location: String,
    events: Vec<Event>,
}

impl FixtureCalendar {
    pub fn new(team: &str, location: &str) -> Self {
        Self {
            prodid: format!("-//fixcal fixtures - {team}//fixcal//"),
            location: location.to_string(),
            events: Vec::new(),
        }
    }

    /// Stamp the event with a fresh v4 UUID and the shared venue, then
    /// append it to the document.
    pub fn add_event(&mut self, mut event: Event) {
        event.uid(&Uuid::new_v4().to_string());
        event.location(&self.location);
        self.events.push(event.done());
    }

    /// Render the VCALENDAR envelope by hand. RFC 5545 permits PRODID and
    /// VERSION exactly once per calendar, and `icalendar::Calendar` always
    /// writes its own header block, which would duplicate both.
    pub fn to_ics(&self) -> String {
        let mut ics = String::new();
        ics.push_str("BEGIN:VCALENDAR\r\n");
        ics.push_str("VERSION:2.0\r\n");
        ics.push_str(&format!("PRODID:{}\r\n", self.prodid));
        ics.push_str("CALSCALE:GREGORIAN\r\n");
        for event in &self.events {
            ics.push_str(&event.to_string());
        }
        ics.push_str("END:VCALENDAR\r\n");
        ics
    }
}

/// Builds the calendar for a run and writes it below the export directory.
pub struct CalendarExporter {
    team: String,
    location: String,
    export_dir: PathBuf,
}

impl CalendarExporter {
    pub fn new(config: &Config) -> Self {
        Self {
            team: config.team.clone(),
            location: config.location.clone(),
            export_dir: config.export_dir.clone(),
        }
    }

    fn event_for(fixture: &Fixture) -> Event {
        let mut event = Event::new();
        event
            .summary(&fixture.title())
            .description(&fixture.to_string())
            .starts(fixture.start)
            .ends(fixture.start + Duration::minutes(MATCH_SLOT_MINUTES));
        event
    }

    /// Serialize all fixtures into `<export_dir>/MyCalendar/MyCalendar.ics`.
    ///
    /// Every event is constructed before any file I/O happens, so a failure
    /// never leaves a partially exported run behind. The write itself is a
    /// plain overwrite; on [`Error::Export`] the file state is unknown.
    pub fn export(&self, fixtures: &[Fixture]) -> Result<PathBuf> {
        let mut calendar = FixtureCalendar::new(&self.team, &self.location);
        for fixture in fixtures {
            calendar.add_event(Self::event_for(fixture));
        }

        let directory = self.export_dir.join(CALENDAR_DIR);
        fs::create_dir_all(&directory).map_err(|e| Error::Export {
            path: directory.clone(),
            source: e,
        })?;

        let path = directory.join(CALENDAR_FILE);
        fs::write(&path, calendar.to_ics()).map_err(|e| Error::Export {
            path: path.clone(),
            source: e,
        })?;

        log::info!("Wrote {} event(s) to {}", fixtures.len(), path.display());
        Ok(path)
    }
}
