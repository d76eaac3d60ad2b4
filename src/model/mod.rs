// File: ./src/model/mod.rs
mod fixture;

pub use fixture::{Fixture, RawFixture, parse_start};
