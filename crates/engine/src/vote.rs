use std::collections::BTreeMap;

use crate::lexicon::OccupationMatcher;

// ---------------------------------------------------------------------------
// Categories + votes
// ---------------------------------------------------------------------------

/// Token categories. Declaration order is the resolver's tie-break order.
/// `AlreadyConsidered` is a terminal state only; it never receives votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Occupation,
    Name,
    Address,
    Predicate,
    Ambiguous,
    AlreadyConsidered,
}

impl Category {
    /// Categories that can receive votes, in tie-break order.
    pub const VOTABLE: [Category; 5] = [
        Category::Occupation,
        Category::Name,
        Category::Address,
        Category::Predicate,
        Category::Ambiguous,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Occupation => write!(f, "occupation"),
            Self::Name => write!(f, "name"),
            Self::Address => write!(f, "address"),
            Self::Predicate => write!(f, "predicate"),
            Self::Ambiguous => write!(f, "ambiguous"),
            Self::AlreadyConsidered => write!(f, "already-considered"),
        }
    }
}

/// One weighted vote for a category. Votes accumulate, never replace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vote {
    pub category: Category,
    pub weight: f64,
}

impl Vote {
    pub fn new(category: Category, weight: f64) -> Self {
        Self { category, weight }
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// Per-token classification state carried through the pipeline.
///
/// Mutable during consolidation: token string, votes, sums, winner, and
/// additional attributes may all be rewritten by rules operating from
/// earlier positions. The original index never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub token: String,
    pub index: usize,
    pub votes: Vec<Vote>,
    pub sums: BTreeMap<Category, f64>,
    /// Winning (category, sum); valid after resolution.
    pub winner: (Category, f64),
    /// Key/value attributes attached by predicate rules; append-only.
    pub additional: Vec<(String, String)>,
}

impl Decision {
    pub fn new(token: impl Into<String>, index: usize) -> Self {
        Self {
            token: token.into(),
            index,
            votes: Vec::new(),
            sums: BTreeMap::new(),
            winner: (Category::Ambiguous, 0.0),
            additional: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Voting rules
// ---------------------------------------------------------------------------

const WEIGHT_SHORT: f64 = 1.9;
const WEIGHT_KNOWN_PREDICATE: f64 = 1.9;
const WEIGHT_HAS_DIGIT: f64 = 2.0;
const WEIGHT_FIRST_TOKEN: f64 = 1.0;
const WEIGHT_MOSTLY_UPPER: f64 = 2.0;
const WEIGHT_SINGLE_WORD: f64 = 0.5;

/// Evaluate every heuristic against every token. Rules are not mutually
/// exclusive; a token commonly collects votes in several categories and
/// the ambiguity is resolved later so the evidence stays separable.
pub fn cast_votes(tokens: &[String], matcher: &dyn OccupationMatcher) -> Vec<Decision> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let mut decision = Decision::new(token.clone(), index);
            let votes = &mut decision.votes;

            if is_short(token) {
                votes.push(Vote::new(Category::Predicate, WEIGHT_SHORT));
            }
            if is_known_predicate(token) {
                votes.push(Vote::new(Category::Predicate, WEIGHT_KNOWN_PREDICATE));
            }
            if contains_digit(token) {
                votes.push(Vote::new(Category::Address, WEIGHT_HAS_DIGIT));
            }
            if index == 0 {
                votes.push(Vote::new(Category::Name, WEIGHT_FIRST_TOKEN));
                if !contains_digit(token) {
                    votes.push(Vote::new(Category::Name, WEIGHT_FIRST_TOKEN));
                }
            }
            if token.chars().count() > 2 && percent_uppercase(token) > 0.5 {
                votes.push(Vote::new(Category::Name, WEIGHT_MOSTLY_UPPER));
            }
            votes.push(Vote::new(Category::Occupation, matcher.score(token)));
            if no_whitespace(token) {
                votes.push(Vote::new(Category::Address, WEIGHT_SINGLE_WORD));
            }

            decision
        })
        .collect()
}

pub(crate) fn contains_digit(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
}

/// One of N/S/E/W, optionally followed by one more character.
pub(crate) fn matches_cardinal_dir(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if matches!(c.to_ascii_lowercase(), 'n' | 's' | 'e' | 'w') => {
            chars.next().is_none() || chars.next().is_none()
        }
        _ => false,
    }
}

fn no_whitespace(token: &str) -> bool {
    !token.chars().any(char::is_whitespace)
}

fn is_short(token: &str) -> bool {
    token.chars().count() < 2
}

/// `wid`, `h`, or `r`, case-insensitive, with at most one trailing char.
fn is_known_predicate(token: &str) -> bool {
    let lower = token.to_lowercase();
    let len = lower.chars().count();
    (lower.starts_with("wid") && (3..=4).contains(&len))
        || ((lower.starts_with('h') || lower.starts_with('r')) && (1..=2).contains(&len))
}

/// Fraction of non-space alphabetic characters that are uppercase.
fn percent_uppercase(token: &str) -> f64 {
    let alpha: Vec<char> = token.chars().filter(|c| c.is_alphabetic()).collect();
    if alpha.is_empty() {
        return 0.0;
    }
    let upper = alpha.iter().filter(|c| c.is_uppercase()).count();
    upper as f64 / alpha.len() as f64
}
