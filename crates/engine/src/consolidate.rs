use crate::model::{Location, Record, Subject};
use crate::resolve::recount;
use crate::vote::{matches_cardinal_dir, Category, Decision, Vote};

/// Walk the resolved decisions once, left to right, dispatching on each
/// decision's winning category and accumulating the record.
///
/// Rules may reach forward and rewrite not-yet-visited decisions (vote
/// amendments, forced reclassification, the already-considered
/// sentinel), which then changes how those decisions are processed when
/// the pass reaches them. All lookahead off the end of the sequence is
/// a no-op.
pub fn consolidate(mut decisions: Vec<Decision>) -> Record {
    let mut record = Record::default();

    for index in 0..decisions.len() {
        let category = decisions[index].winner.0;
        let token_value = decisions[index].token.clone();

        match category {
            Category::Name => {
                if !merge_into_next(&mut decisions, index, Category::Name) {
                    record.subject.push(Subject::primary(token_value));
                }
                // on merge the subject is emitted at the merged decision
            }
            Category::Occupation => {
                if let Some(primary) = record.subject.first_mut() {
                    primary.occupation = Some(token_value);
                }
            }
            Category::Predicate => {
                apply_predicate(&mut decisions, index, &token_value, &mut record);
            }
            Category::Address => {
                emit_address(&mut decisions, index, &mut record);
            }
            Category::Ambiguous | Category::AlreadyConsidered => {}
        }
    }

    record
}

/// Predicate dispatch on the literal token value (case as tokenized).
fn apply_predicate(
    decisions: &mut Vec<Decision>,
    index: usize,
    token_value: &str,
    record: &mut Record,
) {
    match token_value {
        "wid" => {
            if let Some(primary) = record.subject.first_mut() {
                primary.occupation = Some("widow".to_string());
            }
            if let Some(name) = claim_deceased_name(decisions, index) {
                record.subject.push(Subject::deceased_spouse(name));
            }
        }
        "h" => {
            amend_forward(
                decisions,
                index,
                &[Category::Occupation, Category::Name],
                Vote::new(Category::Address, 1.0),
            );
            attach_forward(decisions, index, Category::Address, ("type", "home"));
        }
        "r" => {
            amend_forward(
                decisions,
                index,
                &[Category::Occupation, Category::Name],
                Vote::new(Category::Address, 1.0),
            );
            attach_forward(decisions, index, Category::Address, ("position", "rear"));
        }
        _ => {
            // Typically a stray initial: if the previous decision was a
            // name, the token continues the primary subject's name.
            // A leading predicate with no previous decision is dropped.
            if index > 0 {
                if decisions[index - 1].winner.0 == Category::Name {
                    if let Some(primary) = record.subject.first_mut() {
                        primary.value.push(' ');
                        primary.value.push_str(token_value);
                    }
                } else if matches_cardinal_dir(token_value) {
                    emit_address(decisions, index, record);
                }
            }
        }
    }
}

/// Emit (or merge) the decision at `index` as a location entry.
///
/// A low-confidence occupation guess immediately after an address token
/// is assumed to be an address continuation: its winner tuple is forced
/// to (address, 1.0) before the merge check. The forced rewrite leaves
/// the votes untouched.
fn emit_address(decisions: &mut Vec<Decision>, index: usize, record: &mut Record) {
    if let Some(next) = decisions.get_mut(index + 1) {
        if next.winner.1 < 1.0 && next.winner.0 == Category::Occupation {
            next.winner = (Category::Address, 1.0);
        }
    }

    let mut location = Location {
        value: decisions[index].token.clone(),
        ..Location::default()
    };
    for (key, value) in &decisions[index].additional {
        location.extra.insert(key.clone(), value.clone());
    }

    if !merge_into_next(decisions, index, Category::Address) {
        record.location.push(location);
    }
}

/// Merge the decision at `index` into its immediate successor when both
/// share `category`. The survivor (the later index) takes the
/// concatenated token and inherits the earlier additional attributes if
/// it has none of its own. Returns whether a merge happened.
fn merge_into_next(decisions: &mut [Decision], index: usize, category: Category) -> bool {
    if index + 1 >= decisions.len() || decisions[index + 1].winner.0 != category {
        return false;
    }

    let merged_token = format!("{} {}", decisions[index].token, decisions[index + 1].token);
    let inherited = decisions[index].additional.clone();

    let next = &mut decisions[index + 1];
    next.token = merged_token;
    if next.additional.is_empty() {
        next.additional = inherited;
    }
    true
}

/// Walk forward to the first decision in an acceptable category, append
/// the vote, and recount it. Skips non-matching decisions; runs off the
/// end silently.
fn amend_forward(
    decisions: &mut [Decision],
    index: usize,
    acceptable: &[Category],
    vote: Vote,
) {
    for next in decisions.iter_mut().skip(index + 1) {
        if acceptable.contains(&next.winner.0) {
            next.votes.push(vote);
            recount(next);
            return;
        }
    }
}

/// Walk forward to the first address-category decision and append one
/// additional attribute to it.
fn attach_forward(
    decisions: &mut [Decision],
    index: usize,
    category: Category,
    attribute: (&str, &str),
) {
    for next in decisions.iter_mut().skip(index + 1) {
        if next.winner.0 == category {
            next.additional
                .push((attribute.0.to_string(), attribute.1.to_string()));
            return;
        }
    }
}

/// Forward search for the deceased spouse's name: the first subsequent
/// decision that is name-category or low-confidence (winning sum at or
/// below 0.5). The claimed decision is parked in the terminal
/// already-considered state so it is never processed again.
fn claim_deceased_name(decisions: &mut [Decision], index: usize) -> Option<String> {
    for next in decisions.iter_mut().skip(index + 1) {
        if next.winner.0 == Category::Name || next.winner.1 <= 0.5 {
            next.winner.0 = Category::AlreadyConsidered;
            return Some(next.token.clone());
        }
    }
    None
}
