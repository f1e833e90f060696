use std::fmt;

#[derive(Debug)]
pub enum LexiconError {
    /// JSON parse / deserialization error.
    Parse(String),
    /// The title list contained no usable entries.
    Empty,
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "lexicon parse error: {msg}"),
            Self::Empty => write!(f, "lexicon contains no occupation titles"),
        }
    }
}

impl std::error::Error for LexiconError {}
