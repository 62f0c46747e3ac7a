//! Persisted criteria text format
//!
//! Filter cells are persisted as a small textual language that existing
//! saved filters already use, so it must round-trip exactly:
//!
//! ```text
//! = 5
//! >= 5
//! <= 5
//! Matches 550e8400-e29b-41d4-a716-446655440000
//! Matches 550e8400-e29b-41d4-a716-446655440000 +subitems
//! Matches 550e8400-e29b-41d4-a716-446655440000 +subitems +empty
//! Empty
//! ```
//!
//! Parsing is whitespace-tolerant; `Display` regenerates the canonical form
//! above byte-for-byte. Malformed text is a recoverable [`FilterError`], so
//! a caller that fails to parse a saved cell keeps its previous criteria
//! instead of continuing with undefined state.

use crate::{FilterError, MatchCriteria, PossibilityId};
use regex_lite::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const KW_MATCHES: &str = "Matches";
const KW_EMPTY: &str = "Empty";
const FLAG_SUBITEMS: &str = "+subitems";
const FLAG_EMPTY: &str = "+empty";

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?[0-9]+$").expect("static pattern"))
}

impl FromStr for MatchCriteria {
    type Err = FilterError;

    fn from_str(text: &str) -> Result<Self, FilterError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FilterError::EmptyCriteria);
        }

        // Scalar operators; ">=" and "<=" before "="
        for (op, build) in [
            (">=", MatchCriteria::GreaterOrEqual as fn(i64) -> MatchCriteria),
            ("<=", MatchCriteria::LessOrEqual as fn(i64) -> MatchCriteria),
            ("=", MatchCriteria::Equal as fn(i64) -> MatchCriteria),
        ] {
            if let Some(rest) = text.strip_prefix(op) {
                let rest = rest.trim();
                if !number_re().is_match(rest) {
                    return Err(FilterError::InvalidNumber(rest.to_string()));
                }
                let value = rest
                    .parse::<i64>()
                    .map_err(|_| FilterError::InvalidNumber(rest.to_string()))?;
                return Ok(build(value));
            }
        }

        if text == KW_EMPTY {
            return Ok(MatchCriteria::Empty);
        }

        let mut tokens = text.split_whitespace();
        match tokens.next() {
            Some(KW_MATCHES) => {
                let reference = tokens
                    .next()
                    .ok_or_else(|| FilterError::InvalidReference(String::new()))?;
                let target = PossibilityId::from_string(reference)
                    .ok_or_else(|| FilterError::InvalidReference(reference.to_string()))?;

                let mut include_subitems = false;
                let mut match_empty = false;
                for flag in tokens {
                    match flag {
                        FLAG_SUBITEMS => include_subitems = true,
                        FLAG_EMPTY => match_empty = true,
                        other => return Err(FilterError::TrailingText(other.to_string())),
                    }
                }

                Ok(MatchCriteria::Matches {
                    target,
                    include_subitems,
                    match_empty,
                })
            }
            Some(other) => Err(FilterError::UnrecognizedOperator(other.to_string())),
            None => Err(FilterError::EmptyCriteria),
        }
    }
}

impl fmt::Display for MatchCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchCriteria::Equal(n) => write!(f, "= {n}"),
            MatchCriteria::GreaterOrEqual(n) => write!(f, ">= {n}"),
            MatchCriteria::LessOrEqual(n) => write!(f, "<= {n}"),
            MatchCriteria::Matches {
                target,
                include_subitems,
                match_empty,
            } => {
                write!(f, "{KW_MATCHES} {target}")?;
                if *include_subitems {
                    write!(f, " {FLAG_SUBITEMS}")?;
                }
                if *match_empty {
                    write!(f, " {FLAG_EMPTY}")?;
                }
                Ok(())
            }
            MatchCriteria::Empty => write!(f, "{KW_EMPTY}"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
