//! Occupation vocabulary loading. The engine only sees the constructed
//! read-only lexicon; all file IO stays here.

use std::path::Path;

use citydir_engine::OccupationLexicon;

use crate::exit_codes::EXIT_LEXICON;
use crate::CliError;

/// Curated historical occupation titles, embedded at build time.
const DEFAULT_TITLES: &str = include_str!("../data/occupations.json");

fn lexicon_err(msg: impl Into<String>) -> CliError {
    CliError {
        code: EXIT_LEXICON,
        message: msg.into(),
        hint: Some("expected a JSON array of occupation title strings".into()),
    }
}

/// Build the lexicon from `--lexicon <file>` when given, otherwise from
/// the embedded default list.
pub fn load(path: Option<&Path>) -> Result<OccupationLexicon, CliError> {
    match path {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .map_err(|e| lexicon_err(format!("cannot read {}: {e}", path.display())))?;
            OccupationLexicon::from_json(&data)
                .map_err(|e| lexicon_err(format!("{}: {e}", path.display())))
        }
        None => OccupationLexicon::from_json(DEFAULT_TITLES)
            .map_err(|e| lexicon_err(format!("embedded lexicon: {e}"))),
    }
}
