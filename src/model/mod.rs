//! Board model - the complete editing state
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod board;
pub mod drag;
pub mod process;
pub mod ui;

pub use drag::{DragContext, DragKind, EmptySlotDrag, ItemDrag, ProcessDrag};
pub use process::{ItemId, Process, ProcessId, ProcessItem, Slot, PLACEHOLDER_ID};
pub use ui::{Affordances, Mode};

use std::collections::HashSet;

/// The complete board model
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardModel {
    /// Processes in display order
    pub processes: Vec<Process>,
    /// Viewer or editor
    pub mode: Mode,
    /// The single active drag gesture, if any
    pub drag: DragContext,
}

impl BoardModel {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_processes(mut self, processes: Vec<Process>) -> Self {
        self.processes = processes;
        self
    }

    pub fn process(&self, process_id: &ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| &p.id == process_id)
    }

    pub fn process_mut(&mut self, process_id: &ProcessId) -> Option<&mut Process> {
        self.processes.iter_mut().find(|p| &p.id == process_id)
    }

    /// Item in a given slot of a given process
    pub fn item_at(&self, process_id: &ProcessId, slot_index: usize) -> Option<&ProcessItem> {
        self.process(process_id)?.item_at(slot_index)
    }

    pub fn affordances(&self) -> Affordances {
        Affordances::for_mode(self.mode)
    }

    pub fn total_slots(&self) -> usize {
        self.processes.iter().map(Process::slot_count).sum()
    }

    /// Describe every structural inconsistency in the model
    ///
    /// An empty result means the model is well-formed.
    pub fn invariant_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        let mut process_ids = HashSet::new();
        let mut item_ids = HashSet::new();
        for process in &self.processes {
            if !process_ids.insert(&process.id) {
                violations.push(format!("duplicate process id {}", process.id));
            }
            for (index, item) in process.filled_slots() {
                if !item_ids.insert(&item.id) {
                    violations.push(format!(
                        "duplicate item id {} (process {}, slot {})",
                        item.id, process.id, index
                    ));
                }
            }
        }

        match &self.drag {
            DragContext::None => {}
            DragContext::Item(drag) => match self.process(&drag.process_id) {
                None => violations.push(format!(
                    "item drag from missing process {}",
                    drag.process_id
                )),
                Some(process) if process.item_at(drag.item_index) != Some(&drag.item) => {
                    violations.push(format!(
                        "item drag source slot {} of {} no longer holds {}",
                        drag.item_index, drag.process_id, drag.item.id
                    ))
                }
                Some(_) => {}
            },
            DragContext::EmptySlot(drag) => match self.process(&drag.process_id) {
                None => violations.push(format!(
                    "empty-slot drag from missing process {}",
                    drag.process_id
                )),
                Some(process) if !process.is_empty_slot(drag.item_index) => violations.push(
                    format!(
                        "empty-slot drag source slot {} of {} is not empty",
                        drag.item_index, drag.process_id
                    ),
                ),
                Some(_) => {}
            },
            DragContext::Process(drag) => {
                if self.process(&drag.process_id).is_none() {
                    violations.push(format!("process drag of missing process {}", drag.process_id));
                }
            }
        }

        violations
    }
}
