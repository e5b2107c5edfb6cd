//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::commands::PendingCreate;
use crate::model::{Mode, ProcessId, ProcessItem};

/// Mode messages
#[derive(Debug, Clone)]
pub enum UiMsg {
    /// Set the board mode (unconditional)
    ToggleMode(Mode),
}

/// Creation and structural editing messages
#[derive(Debug, Clone)]
pub enum BoardMsg {
    /// Request an id, then append a new process
    CreateProcess { name: String },
    /// Request an id, then place `prototype` into an existing slot
    CreateItem {
        process_id: ProcessId,
        prototype: ProcessItem,
        slot_index: usize,
    },
    /// Append an empty slot to a process
    AddEmptySlot(ProcessId),
    /// Edit a process name (editor mode only)
    RenameProcess { process_id: ProcessId, name: String },
    /// Edit a filled slot's item (editor mode only)
    RenameItem {
        process_id: ProcessId,
        slot_index: usize,
        name: String,
        description: String,
    },
}

/// Drag gesture lifecycle messages
#[derive(Debug, Clone)]
pub enum DragMsg {
    /// Begin dragging the item in a filled slot
    StartItem {
        process_id: ProcessId,
        item: ProcessItem,
        item_index: usize,
    },
    EndItem,
    /// Begin dragging an empty slot
    StartEmptySlot {
        process_id: ProcessId,
        item_index: usize,
    },
    EndEmptySlot,
    /// Begin dragging a whole process
    StartProcess(ProcessId),
    EndProcess,
    /// Pointer entered (true) or left (false) a valid drop target
    SetTargeting(bool),
}

/// Where a dragged item was released
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// The "add slot" area at the end of a process
    NewSlot { process_id: ProcessId },
    /// The trash bin
    Bin,
    /// An existing empty slot
    EmptySlot {
        process_id: ProcessId,
        slot_index: usize,
    },
    /// Another filled slot; the two items swap
    ProcessItem {
        process_id: ProcessId,
        item: ProcessItem,
        slot_index: usize,
    },
}

/// Drop messages, one per drag kind
#[derive(Debug, Clone)]
pub enum DropMsg {
    /// Release the dragged item on a target
    Item(DropTarget),
    /// Release the dragged empty slot on the bin
    EmptySlotInBin,
    /// Release the dragged process on the bin
    ProcessInBin,
}

/// Ticket for one id request issued by the runtime
///
/// Only the runtime mints tickets; anything else raising `IdAllocated` uses
/// [`RequestId::UNTRACKED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub(crate) u64);

impl RequestId {
    pub const UNTRACKED: RequestId = RequestId(u64::MAX);
}

/// Application-level messages
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// The allocator answered a pending create request
    ///
    /// `request` is the runtime's ticket for the request it answers.
    IdAllocated {
        request: RequestId,
        id: u64,
        pending: PendingCreate,
    },
    /// Explicitly do nothing
    Noop,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Ui(UiMsg),
    Board(BoardMsg),
    Drag(DragMsg),
    Drop(DropMsg),
    App(AppMsg),
}
