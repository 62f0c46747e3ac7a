//! Match criteria and the cell evaluator
//!
//! A filter cell holds one criterion: a scalar integer comparison, a
//! set-membership test against a possibility item (optionally including its
//! sub-items, optionally also matching an empty collection), or an
//! emptiness test. Set-membership cells precompute their match-set once so
//! evaluation is a hash lookup per value.

use crate::{Possibility, PossibilityId, PossibilityList};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// =============================================================================
// Criteria
// =============================================================================

/// One cell's match criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchCriteria {
    /// Value equals the threshold
    Equal(i64),
    /// Value is at least the threshold
    GreaterOrEqual(i64),
    /// Value is at most the threshold
    LessOrEqual(i64),
    /// Any value is the target item (or one of its sub-items when
    /// `include_subitems` is set); an empty collection matches when
    /// `match_empty` is set
    Matches {
        target: PossibilityId,
        include_subitems: bool,
        match_empty: bool,
    },
    /// The collection is empty
    Empty,
}

impl MatchCriteria {
    /// Check whether this is one of the scalar comparison kinds
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            MatchCriteria::Equal(_) | MatchCriteria::GreaterOrEqual(_) | MatchCriteria::LessOrEqual(_)
        )
    }
}

// =============================================================================
// FilterCell
// =============================================================================

/// A single filter cell: a criterion plus its precomputed match-set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterCell {
    criteria: MatchCriteria,
    /// The target item plus (if configured) all of its descendants
    match_set: HashSet<PossibilityId>,
}

impl FilterCell {
    /// Create a cell, precomputing the match-set from the possibility
    /// hierarchy. An unknown target leaves the match-set holding just the
    /// target ID: the item may live in a list not loaded here.
    pub fn new(criteria: MatchCriteria, possibilities: &PossibilityList) -> Self {
        let match_set = match &criteria {
            MatchCriteria::Matches {
                target,
                include_subitems,
                ..
            } => match possibilities.find(*target) {
                Some(item) if *include_subitems => build_match_set(item),
                _ => HashSet::from([*target]),
            },
            _ => HashSet::new(),
        };
        Self { criteria, match_set }
    }

    /// Get the criterion
    pub fn criteria(&self) -> &MatchCriteria {
        &self.criteria
    }

    /// The precomputed match-set (empty for scalar kinds)
    pub fn match_set(&self) -> &HashSet<PossibilityId> {
        &self.match_set
    }

    /// Evaluate a scalar value. Set-membership kinds never match a scalar.
    pub fn matches_value(&self, value: i64) -> bool {
        match self.criteria {
            MatchCriteria::Equal(threshold) => value == threshold,
            MatchCriteria::GreaterOrEqual(threshold) => value >= threshold,
            MatchCriteria::LessOrEqual(threshold) => value <= threshold,
            MatchCriteria::Matches { .. } | MatchCriteria::Empty => false,
        }
    }

    /// Evaluate a collection of item values. Scalar kinds never match a
    /// collection.
    pub fn matches_set(&self, values: &[PossibilityId]) -> bool {
        match &self.criteria {
            MatchCriteria::Matches { match_empty, .. } => {
                if values.is_empty() {
                    *match_empty
                } else {
                    values.iter().any(|v| self.match_set.contains(v))
                }
            }
            MatchCriteria::Empty => values.is_empty(),
            _ => false,
        }
    }
}

/// Collect an item and all of its descendants into a match-set, pre-order
fn build_match_set(item: &Possibility) -> HashSet<PossibilityId> {
    item.self_and_descendant_ids().into_iter().collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn hierarchy() -> (PossibilityList, Vec<PossibilityId>) {
        // A { B, C { D } }
        let d = Possibility::new("D");
        let d_id = d.id();
        let b = Possibility::new("B");
        let b_id = b.id();
        let c = Possibility::new("C").subitem(d);
        let c_id = c.id();
        let a = Possibility::new("A").subitem(b).subitem(c);
        let a_id = a.id();
        (
            PossibilityList::new().item(a),
            vec![a_id, b_id, c_id, d_id],
        )
    }

    #[test]
    fn test_scalar_comparisons() {
        let list = PossibilityList::new();

        let eq = FilterCell::new(MatchCriteria::Equal(5), &list);
        assert!(eq.matches_value(5));
        assert!(!eq.matches_value(4));

        let ge = FilterCell::new(MatchCriteria::GreaterOrEqual(5), &list);
        assert!(ge.matches_value(5));
        assert!(ge.matches_value(9));
        assert!(!ge.matches_value(4));

        let le = FilterCell::new(MatchCriteria::LessOrEqual(5), &list);
        assert!(le.matches_value(5));
        assert!(le.matches_value(-3));
        assert!(!le.matches_value(6));
    }

    #[test]
    fn test_matches_with_subitems() {
        let (list, ids) = hierarchy();
        let cell = FilterCell::new(
            MatchCriteria::Matches {
                target: ids[0],
                include_subitems: true,
                match_empty: false,
            },
            &list,
        );

        // Matches A, B, C, D and nothing else
        for id in &ids {
            assert!(cell.matches_set(&[*id]));
        }
        assert!(!cell.matches_set(&[PossibilityId::new()]));
        assert!(!cell.matches_set(&[]));
    }

    #[test]
    fn test_matches_without_subitems() {
        let (list, ids) = hierarchy();
        let cell = FilterCell::new(
            MatchCriteria::Matches {
                target: ids[0],
                include_subitems: false,
                match_empty: false,
            },
            &list,
        );

        assert!(cell.matches_set(&[ids[0]]));
        assert!(!cell.matches_set(&[ids[1]]));
    }

    #[test]
    fn test_matches_with_match_empty() {
        let (list, ids) = hierarchy();
        let cell = FilterCell::new(
            MatchCriteria::Matches {
                target: ids[2],
                include_subitems: false,
                match_empty: true,
            },
            &list,
        );

        assert!(cell.matches_set(&[]));
        assert!(cell.matches_set(&[ids[2]]));
        assert!(!cell.matches_set(&[ids[1]]));
    }

    #[test]
    fn test_empty_kind() {
        let list = PossibilityList::new();
        let cell = FilterCell::new(MatchCriteria::Empty, &list);

        assert!(cell.matches_set(&[]));
        assert!(!cell.matches_set(&[PossibilityId::new()]));
    }

    #[test]
    fn test_scalar_and_set_kinds_do_not_cross() {
        let (list, ids) = hierarchy();
        let scalar = FilterCell::new(MatchCriteria::Equal(1), &list);
        assert!(!scalar.matches_set(&[ids[0]]));

        let set = FilterCell::new(
            MatchCriteria::Matches {
                target: ids[0],
                include_subitems: false,
                match_empty: false,
            },
            &list,
        );
        assert!(!set.matches_value(1));
    }

    #[test]
    fn test_unknown_target_keeps_target_in_set() {
        let list = PossibilityList::new();
        let target = PossibilityId::new();
        let cell = FilterCell::new(
            MatchCriteria::Matches {
                target,
                include_subitems: true,
                match_empty: false,
            },
            &list,
        );
        assert!(cell.matches_set(&[target]));
    }
}
