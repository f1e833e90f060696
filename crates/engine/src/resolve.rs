use crate::vote::{Category, Decision};

/// Recompute one decision's per-category sums and winner from its
/// current votes. Invoked after initial voting and again whenever a
/// consolidation rule appends votes, so the recorded winning sum always
/// equals the sum of the weights actually attached.
pub fn recount(decision: &mut Decision) {
    let mut sums = std::collections::BTreeMap::new();
    for category in Category::VOTABLE {
        sums.insert(category, 0.0);
    }
    for vote in &decision.votes {
        *sums.entry(vote.category).or_insert(0.0) += vote.weight;
    }

    // Strictly-greater argmax: on ties the first category in VOTABLE
    // order wins, so resolution is deterministic.
    let mut winner = (Category::Occupation, sums[&Category::Occupation]);
    for category in &Category::VOTABLE[1..] {
        let sum = sums[category];
        if sum > winner.1 {
            winner = (*category, sum);
        }
    }

    decision.sums = sums;
    decision.winner = winner;
}

/// Resolve winners for a freshly voted sequence.
pub fn resolve_winners(decisions: &mut [Decision]) {
    for decision in decisions {
        recount(decision);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vote::Vote;

    fn decision_with(votes: &[(Category, f64)]) -> Decision {
        let mut d = Decision::new("tok", 0);
        d.votes = votes.iter().map(|&(c, w)| Vote::new(c, w)).collect();
        d
    }

    #[test]
    fn sums_accumulate_per_category() {
        let mut d = decision_with(&[
            (Category::Name, 1.0),
            (Category::Name, 1.0),
            (Category::Address, 0.5),
        ]);
        recount(&mut d);
        assert_eq!(d.sums[&Category::Name], 2.0);
        assert_eq!(d.sums[&Category::Address], 0.5);
        assert_eq!(d.sums[&Category::Predicate], 0.0);
        assert_eq!(d.winner, (Category::Name, 2.0));
    }

    #[test]
    fn tie_breaks_in_declaration_order() {
        let mut d = decision_with(&[(Category::Occupation, 0.5), (Category::Address, 0.5)]);
        recount(&mut d);
        assert_eq!(d.winner, (Category::Occupation, 0.5));

        let mut d = decision_with(&[(Category::Address, 0.5), (Category::Predicate, 0.5)]);
        recount(&mut d);
        assert_eq!(d.winner, (Category::Address, 0.5));
    }

    #[test]
    fn no_votes_resolves_to_first_category_at_zero() {
        let mut d = decision_with(&[]);
        recount(&mut d);
        assert_eq!(d.winner, (Category::Occupation, 0.0));
    }

    #[test]
    fn recount_is_idempotent() {
        let mut d = decision_with(&[(Category::Predicate, 1.9), (Category::Occupation, -0.5)]);
        recount(&mut d);
        let first = d.clone();
        recount(&mut d);
        assert_eq!(d, first);
    }

    #[test]
    fn recount_after_appended_vote() {
        let mut d = decision_with(&[(Category::Occupation, 0.5), (Category::Address, 0.4)]);
        recount(&mut d);
        assert_eq!(d.winner.0, Category::Occupation);

        d.votes.push(Vote::new(Category::Address, 1.0));
        recount(&mut d);
        assert_eq!(d.winner, (Category::Address, 1.4));
        let total: f64 = d
            .votes
            .iter()
            .filter(|v| v.category == Category::Address)
            .map(|v| v.weight)
            .sum();
        assert_eq!(d.winner.1, total);
    }
}
