// File: tests/export_tests.rs
use chrono::NaiveDate;
use fixcal::config::Config;
use fixcal::export::{CALENDAR_DIR, CALENDAR_FILE, CalendarExporter};
use fixcal::model::Fixture;
use fixcal::source::{filter_for_team, parse_fixtures};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

fn temp_export_dir() -> PathBuf {
    std::env::temp_dir().join(format!("fixcal-test-{}", Uuid::new_v4()))
}

fn test_config(export_dir: &PathBuf) -> Config {
    Config {
        fixtures_url: "http://unused.invalid/".to_string(),
        team: "Oldbury".to_string(),
        export_dir: export_dir.clone(),
        location: "Portway Lifestyle Centre".to_string(),
    }
}

fn sample_fixture() -> Fixture {
    Fixture {
        team: "Oldbury".to_string(),
        opponent: "Rivals FC".to_string(),
        home: true,
        start: NaiveDate::from_ymd_opt(2024, 5, 14)
            .unwrap()
            .and_hms_opt(19, 45, 0)
            .unwrap(),
    }
}

#[test]
fn export_writes_the_calendar_below_a_fixed_subdirectory() {
    let dir = temp_export_dir();
    let exporter = CalendarExporter::new(&test_config(&dir));

    let path = exporter.export(&[sample_fixture()]).unwrap();
    assert_eq!(path, dir.join(CALENDAR_DIR).join(CALENDAR_FILE));

    let ics = fs::read_to_string(&path).unwrap();
    assert!(ics.starts_with("BEGIN:VCALENDAR"));
    assert!(ics.contains("END:VCALENDAR"));
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
    assert!(ics.contains("SUMMARY:Oldbury vs Rivals FC"));
    assert!(ics.contains("DTSTART:20240514T194500"));
    assert!(ics.contains("DTEND:20240514T201500"));

    // One PRODID and one VERSION line, ours.
    let header_lines: Vec<&str> = ics
        .lines()
        .filter(|line| line.starts_with("PRODID:") || line.starts_with("VERSION:"))
        .collect();
    assert_eq!(
        header_lines,
        vec!["VERSION:2.0", "PRODID:-//fixcal fixtures - Oldbury//fixcal//"]
    );

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn exporting_no_fixtures_still_writes_a_valid_empty_calendar() {
    let dir = temp_export_dir();
    let exporter = CalendarExporter::new(&test_config(&dir));

    let path = exporter.export(&[]).unwrap();
    let ics = fs::read_to_string(&path).unwrap();
    assert!(ics.starts_with("BEGIN:VCALENDAR"));
    assert!(ics.contains("END:VCALENDAR"));
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 0);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn export_overwrites_an_existing_file() {
    let dir = temp_export_dir();
    let exporter = CalendarExporter::new(&test_config(&dir));

    exporter.export(&[sample_fixture(), sample_fixture()]).unwrap();
    let path = exporter.export(&[sample_fixture()]).unwrap();

    let ics = fs::read_to_string(&path).unwrap();
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);

    fs::remove_dir_all(&dir).ok();
}

// End-to-end: one parsed list item becomes one correctly timed event.
#[test]
fn scraped_page_round_trips_into_a_timed_event() {
    let page = r#"
    <div id="upcomingfixtures"><ul><li>
      <h4>Tuesday 14 May</h4>
      <div class="team text-right"><span>Oldbury</span></div>
      <div class="team right text-left"><span>Rivals FC</span></div>
      <div class="schedule">
        <span class="match-time">18:00</span>
        <span class="match-time">19:45</span>
      </div>
    </li></ul></div>"#;

    let raw = parse_fixtures(page).unwrap();
    let fixtures = filter_for_team(&raw, "Oldbury").unwrap();
    assert_eq!(fixtures.len(), 1);

    let dir = temp_export_dir();
    let path = CalendarExporter::new(&test_config(&dir))
        .export(&fixtures)
        .unwrap();
    let ics = fs::read_to_string(&path).unwrap();

    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
    assert!(ics.contains("SUMMARY:Oldbury vs Rivals FC"));
    assert!(ics.contains("UID:"));
    assert!(ics.contains("LOCATION:Portway Lifestyle Centre"));

    // The year is resolved at run time; pin down everything after it.
    let dtstart = ics
        .lines()
        .find(|line| line.starts_with("DTSTART:"))
        .unwrap();
    assert!(dtstart.ends_with("0514T194500"), "got {dtstart}");
    let dtend = ics.lines().find(|line| line.starts_with("DTEND:")).unwrap();
    assert!(dtend.ends_with("0514T201500"), "got {dtend}");

    fs::remove_dir_all(&dir).ok();
}
