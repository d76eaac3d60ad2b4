// File: ./src/error.rs
// Domain error taxonomy. Nothing here is caught or retried internally;
// every variant surfaces to the process boundary and aborts the run.
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure while fetching the fixture page.
    #[error("fixture page request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The fixture page answered with a non-success status.
    #[error("fixture page returned HTTP {0}")]
    FetchStatus(reqwest::StatusCode),

    /// A fixture list item was missing an expected sub-element.
    #[error("fixture entry is missing its {0}")]
    MalformedFixture(&'static str),

    /// Date/time text did not match the expected "Weekday DD Month HH:MM"
    /// pattern, or no nearby year puts that date on the stated weekday.
    #[error("cannot parse fixture date '{text}': {reason}")]
    DateParse { text: String, reason: String },

    /// Filesystem failure while writing the calendar. The file state is
    /// unknown after this; no cleanup is attempted.
    #[error("calendar export failed at '{}': {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
