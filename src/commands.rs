//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::model::{ProcessId, ProcessItem};

/// What to build once the allocator hands back a fresh id
///
/// This is the continuation half of an id request: the runtime carries it
/// to the allocator and back untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingCreate {
    /// Append a new, slotless process
    Process { name: String },
    /// Place an item into an existing slot
    Item {
        process_id: ProcessId,
        prototype: ProcessItem,
        slot_index: usize,
    },
}

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Model changed, re-render
    Redraw,
    /// Ask the allocator for a fresh id, then deliver `AppMsg::IdAllocated`
    AllocateId(PendingCreate),
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Nothing visible changes until the id comes back
            Cmd::AllocateId(_) => false,
        }
    }
}
