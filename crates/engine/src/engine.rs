use crate::consolidate::consolidate;
use crate::lexicon::OccupationMatcher;
use crate::model::Record;
use crate::resolve::resolve_winners;
use crate::tokenize::tokenize;
use crate::vote::cast_votes;

/// Parse one directory line into a labeled record.
///
/// Pure function of the line and the injected vocabulary: no shared
/// state, no IO. Malformed input degrades to an empty or partial record
/// rather than an error.
pub fn parse_line(line: &str, matcher: &dyn OccupationMatcher) -> Record {
    let tokens = tokenize(line);
    let mut decisions = cast_votes(&tokens, matcher);
    resolve_winners(&mut decisions);
    consolidate(decisions)
}
