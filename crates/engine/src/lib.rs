//! `citydir-engine` — token classification engine for historical
//! city-directory entries.
//!
//! Pure engine crate: receives one free-text directory line, returns a
//! labeled `Record`. No CLI or IO dependencies; the occupation
//! vocabulary is injected through the [`OccupationMatcher`] trait.

pub mod consolidate;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod model;
pub mod resolve;
pub mod tokenize;
pub mod vote;

pub use engine::parse_line;
pub use error::LexiconError;
pub use lexicon::{OccupationLexicon, OccupationMatcher};
pub use model::{Location, Record, Subject, SubjectType};
pub use vote::{Category, Decision, Vote};
