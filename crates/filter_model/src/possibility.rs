//! Possibility lists - hierarchical choice items referenced by filters

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a possibility item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PossibilityId(Uuid);

impl PossibilityId {
    /// Create a new random PossibilityId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a PossibilityId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Create a PossibilityId from a string representation
    pub fn from_string(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for PossibilityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PossibilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A hierarchical choice item. Sub-items are owned exclusively by their
/// parent item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Possibility {
    id: PossibilityId,
    /// Display name of the item
    pub name: String,
    /// Sub-items, in list order
    pub subitems: Vec<Possibility>,
}

impl Possibility {
    /// Create a new leaf item
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PossibilityId::new(),
            name: name.into(),
            subitems: Vec::new(),
        }
    }

    /// Add a sub-item, returning self for chained construction
    pub fn subitem(mut self, item: Possibility) -> Self {
        self.subitems.push(item);
        self
    }

    /// Get the item ID
    pub fn id(&self) -> PossibilityId {
        self.id
    }

    /// Collect this item's ID plus every descendant's, pre-order
    pub fn self_and_descendant_ids(&self) -> Vec<PossibilityId> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids(&self, ids: &mut Vec<PossibilityId>) {
        ids.push(self.id);
        for sub in &self.subitems {
            sub.collect_ids(ids);
        }
    }

    /// Find an item by ID in this subtree
    pub fn find(&self, id: PossibilityId) -> Option<&Possibility> {
        if self.id == id {
            return Some(self);
        }
        self.subitems.iter().find_map(|sub| sub.find(id))
    }
}

/// A list of top-level possibility items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PossibilityList {
    /// Top-level items, in list order
    pub items: Vec<Possibility>,
}

impl PossibilityList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level item, returning self for chained construction
    pub fn item(mut self, item: Possibility) -> Self {
        self.items.push(item);
        self
    }

    /// Find an item anywhere in the hierarchy
    pub fn find(&self, id: PossibilityId) -> Option<&Possibility> {
        self.items.iter().find_map(|item| item.find(id))
    }
}
