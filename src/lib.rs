// Crate root library declaration and module exports.
//! Scrapes a league site for one team's upcoming fixtures and exports them
//! as an iCalendar file.
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod source;

pub use error::{Error, Result};
