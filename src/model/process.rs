//! Process and item records
//!
//! A process is a named, ordered list of slots. Every slot is either filled
//! with a [`ProcessItem`] or empty; the slot count is meaningful on its own and
//! never changes as a side effect of filling or emptying a slot.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Id carried by records that have not been through the allocator yet
pub const PLACEHOLDER_ID: &str = "temp";

/// Unique identifier for a process
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessId(pub String);

/// Unique identifier for a process item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ProcessId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn placeholder() -> Self {
        Self(PLACEHOLDER_ID.to_string())
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn placeholder() -> Self {
        Self(PLACEHOLDER_ID.to_string())
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ProcessId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// A single unit of work placed in a process slot
///
/// Identity is the `id`. Moves and swaps relocate the same record, they
/// never mint a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ProcessItem {
    /// Create an item prototype with a placeholder id
    pub fn prototype(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: ItemId::placeholder(),
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = id;
        self
    }
}

/// A slot in a process: `None` is an explicit empty slot
pub type Slot = Option<ProcessItem>;

/// A named, ordered sequence of slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: ProcessId,
    pub name: String,
    pub items: Vec<Slot>,
}

impl Process {
    /// Create an empty process with a placeholder id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ProcessId::placeholder(),
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: ProcessId) -> Self {
        self.id = id;
        self
    }

    pub fn with_slots(mut self, items: Vec<Slot>) -> Self {
        self.items = items;
        self
    }

    #[inline]
    pub fn slot_count(&self) -> usize {
        self.items.len()
    }

    /// Item at `index`, or `None` for an empty or missing slot
    pub fn item_at(&self, index: usize) -> Option<&ProcessItem> {
        self.items.get(index).and_then(Option::as_ref)
    }

    /// Whether `index` is an existing slot with no item in it
    pub fn is_empty_slot(&self, index: usize) -> bool {
        matches!(self.items.get(index), Some(None))
    }

    pub fn filled_count(&self) -> usize {
        self.items.iter().filter(|slot| slot.is_some()).count()
    }

    /// Iterate `(slot_index, item)` over filled slots only
    pub fn filled_slots(&self) -> impl Iterator<Item = (usize, &ProcessItem)> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|item| (index, item)))
    }
}
