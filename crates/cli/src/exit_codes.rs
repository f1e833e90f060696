//! CLI Exit Code Registry
//!
//! Single source of truth for all CLI exit codes; scripts rely on them.
//!
//! | Code | Meaning                                        |
//! |------|------------------------------------------------|
//! | 0    | Success                                        |
//! | 1    | General error (unspecified)                    |
//! | 2    | CLI usage error (bad args)                     |
//! | 3    | Lexicon error (unreadable or invalid file)     |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// Lexicon error - the occupation title list cannot be read or parsed.
pub const EXIT_LEXICON: u8 = 3;
