use crate::error::LexiconError;

/// Confidence that a token resembles a known occupation title.
///
/// The engine depends only on this scalar contract; tests substitute
/// deterministic stub vocabularies.
pub trait OccupationMatcher {
    fn score(&self, token: &str) -> f64;
}

// Tier scores, checked in order; only the first satisfied tier applies.
const SCORE_EXACT: f64 = 1.5;
const SCORE_EDIT_1: f64 = 1.0;
const SCORE_EDIT_2: f64 = 0.9;
const SCORE_EDIT_4: f64 = 0.5;
const SCORE_NO_MATCH: f64 = -0.5;

/// Read-only word index over a fixed vocabulary of occupation titles.
///
/// Titles are lowercased and split into words once at construction;
/// lookups never mutate, so sharing one lexicon across threads is safe.
#[derive(Debug, Clone)]
pub struct OccupationLexicon {
    words: Vec<String>,
}

impl OccupationLexicon {
    /// Build the index from a collection of title strings.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = Vec::new();
        for title in titles {
            for word in title.as_ref().to_lowercase().split_whitespace() {
                if !word.is_empty() && !words.iter().any(|w| w == word) {
                    words.push(word.to_string());
                }
            }
        }
        Self { words }
    }

    /// Parse a JSON array of title strings.
    pub fn from_json(input: &str) -> Result<Self, LexiconError> {
        let titles: Vec<String> =
            serde_json::from_str(input).map_err(|e| LexiconError::Parse(e.to_string()))?;
        let lexicon = Self::new(&titles);
        if lexicon.is_empty() {
            return Err(LexiconError::Empty);
        }
        Ok(lexicon)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word-level exact tier: equality always counts; containment only
    /// for query words of 3+ chars, so stray initials never hit it.
    fn exact_match(&self, query: &str) -> bool {
        self.words
            .iter()
            .any(|w| w == query || (query.chars().count() >= 3 && w.contains(query)))
    }

    /// Minimum edit distance between any query word and any indexed word.
    fn min_distance(&self, query: &str) -> Option<usize> {
        self.words.iter().map(|w| strsim::levenshtein(query, w)).min()
    }
}

impl OccupationMatcher for OccupationLexicon {
    fn score(&self, token: &str) -> f64 {
        let token = token.trim().to_lowercase();
        let query_words: Vec<&str> = token.split_whitespace().collect();
        if query_words.is_empty() {
            return SCORE_NO_MATCH;
        }

        if query_words.iter().any(|q| self.exact_match(q)) {
            return SCORE_EXACT;
        }

        let distance = query_words
            .iter()
            .filter_map(|q| self.min_distance(q))
            .min();
        match distance {
            Some(d) if d <= 1 => SCORE_EDIT_1,
            Some(d) if d <= 2 => SCORE_EDIT_2,
            Some(d) if d <= 4 => SCORE_EDIT_4,
            _ => SCORE_NO_MATCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> OccupationLexicon {
        OccupationLexicon::new(["carpenter", "blacksmith", "clerk", "master mariner"])
    }

    #[test]
    fn exact_title_word_scores_top_tier() {
        assert_eq!(lexicon().score("carpenter"), 1.5);
        assert_eq!(lexicon().score("CARPENTER"), 1.5);
        // word of a multi-word title
        assert_eq!(lexicon().score("mariner"), 1.5);
    }

    #[test]
    fn substring_of_a_title_word_scores_top_tier() {
        assert_eq!(lexicon().score("carpent"), 1.5);
    }

    #[test]
    fn short_queries_never_substring_match() {
        // "ar" is inside "carpenter" but a 2-char query is below the floor;
        // it falls through to the edit-distance tiers.
        assert!(lexicon().score("ar") < 1.5);
    }

    #[test]
    fn edit_distance_tiers() {
        // "clerc" -> "clerk" is distance 1
        assert_eq!(lexicon().score("clerc"), 1.0);
        // "clk" -> "clerk" is distance 2
        assert_eq!(lexicon().score("clk"), 0.9);
    }

    #[test]
    fn distant_tokens_score_negative() {
        let lex = OccupationLexicon::new(["superintendent"]);
        assert_eq!(lex.score("45 Elm"), -0.5);
        assert_eq!(lex.score(""), -0.5);
    }

    #[test]
    fn first_satisfied_tier_only() {
        // "carpenter" is both an exact match and within distance 4 of
        // other titles; the exact tier wins and nothing accumulates.
        assert_eq!(lexicon().score("carpenter"), 1.5);
    }

    #[test]
    fn from_json_parses_and_validates() {
        let lex = OccupationLexicon::from_json(r#"["baker", "cooper"]"#).unwrap();
        assert_eq!(lex.len(), 2);

        assert!(matches!(
            OccupationLexicon::from_json("not json"),
            Err(LexiconError::Parse(_))
        ));
        assert!(matches!(
            OccupationLexicon::from_json("[]"),
            Err(LexiconError::Empty)
        ));
        assert!(matches!(
            OccupationLexicon::from_json(r#"["", "  "]"#),
            Err(LexiconError::Empty)
        ));
    }
}
