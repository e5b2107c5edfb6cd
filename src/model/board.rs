//! Mutation engine - structural edits on the board
//!
//! Every operation addresses its process by id and is a silent no-op when the
//! process or slot does not exist.

use super::process::{Process, ProcessId, ProcessItem};
use super::BoardModel;

impl BoardModel {
    /// Append a process to the end of the board
    pub fn add_process(&mut self, process: Process) {
        self.processes.push(process);
    }

    /// Remove the process with the given id
    pub fn remove_process(&mut self, process_id: &ProcessId) {
        self.processes.retain(|p| &p.id != process_id);
    }

    /// Overwrite slot `slot_index` of the target process with `item`
    ///
    /// The slot must already exist; filling never grows the slot list.
    pub fn add_item_to_process(
        &mut self,
        slot_index: usize,
        item: ProcessItem,
        process_id: &ProcessId,
    ) {
        self.set_slot(process_id, slot_index, Some(item));
    }

    /// Empty a slot without removing it, so sibling indices stay stable
    pub fn remove_item_from_process(&mut self, slot_index: usize, process_id: &ProcessId) {
        self.set_slot(process_id, slot_index, None);
    }

    /// Append one empty slot, returning its index
    pub fn add_item_slot(&mut self, process_id: &ProcessId) -> Option<usize> {
        let process = self.process_mut(process_id)?;
        process.items.push(None);
        Some(process.items.len() - 1)
    }

    /// Physically remove slot `slot_index`, shifting later slots down by one
    ///
    /// Only valid for empty slots; a filled slot is left untouched.
    pub fn remove_empty_slot(&mut self, slot_index: usize, process_id: &ProcessId) {
        let Some(process) = self.process_mut(process_id) else {
            return;
        };
        if process.is_empty_slot(slot_index) {
            process.items.remove(slot_index);
        } else if let Some(item) = process.item_at(slot_index) {
            tracing::warn!(
                process = %process_id,
                slot_index,
                item = %item.id,
                "refusing to remove a filled slot"
            );
        }
    }

    /// Rename a process
    pub fn rename_process(&mut self, process_id: &ProcessId, name: String) {
        if let Some(process) = self.process_mut(process_id) {
            process.name = name;
        }
    }

    /// Replace the name and description of the item in a filled slot
    pub fn rename_item(
        &mut self,
        process_id: &ProcessId,
        slot_index: usize,
        name: String,
        description: String,
    ) {
        let item = self
            .process_mut(process_id)
            .and_then(|p| p.items.get_mut(slot_index))
            .and_then(Option::as_mut);
        if let Some(item) = item {
            item.name = name;
            item.description = description;
        }
    }

    fn set_slot(&mut self, process_id: &ProcessId, slot_index: usize, value: Option<ProcessItem>) {
        let slot = self
            .process_mut(process_id)
            .and_then(|p| p.items.get_mut(slot_index));
        match slot {
            Some(slot) => *slot = value,
            None => tracing::debug!(
                process = %process_id,
                slot_index,
                "slot write ignored, no such process or slot"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::process::ItemId;

    fn item(id: &str) -> ProcessItem {
        ProcessItem::prototype(id.to_uppercase(), "").with_id(ItemId::new(id))
    }

    fn board() -> BoardModel {
        let mut model = BoardModel::default();
        model.add_process(
            Process::new("P")
                .with_id(ProcessId::new("p1"))
                .with_slots(vec![Some(item("a")), None, Some(item("b"))]),
        );
        model
    }

    #[test]
    fn test_add_process_appends() {
        let mut model = board();
        model.add_process(Process::new("Q").with_id(ProcessId::new("p2")));
        assert_eq!(model.processes[1].id, ProcessId::new("p2"));
    }

    #[test]
    fn test_remove_empty_slot_ignores_filled_slot() {
        let mut model = board();
        let p1 = ProcessId::new("p1");
        model.remove_empty_slot(0, &p1);
        assert_eq!(model.processes[0].slot_count(), 3);

        model.remove_empty_slot(1, &p1);
        assert_eq!(
            model.processes[0].items,
            vec![Some(item("a")), Some(item("b"))]
        );
    }

    #[test]
    fn test_out_of_range_slot_is_noop() {
        let mut model = board();
        let before = model.processes.clone();
        let p1 = ProcessId::new("p1");
        model.add_item_to_process(9, item("z"), &p1);
        model.remove_item_from_process(9, &p1);
        model.remove_empty_slot(9, &p1);
        assert_eq!(model.processes, before);
    }

    #[test]
    fn test_unknown_process_is_noop() {
        let mut model = board();
        let before = model.processes.clone();
        let ghost = ProcessId::new("ghost");
        model.add_item_to_process(0, item("z"), &ghost);
        assert_eq!(model.add_item_slot(&ghost), None);
        model.remove_process(&ghost);
        model.rename_process(&ghost, "X".into());
        assert_eq!(model.processes, before);
    }

    #[test]
    fn test_rename_item_only_touches_filled_slot() {
        let mut model = board();
        let p1 = ProcessId::new("p1");
        model.rename_item(&p1, 1, "X".into(), "x".into());
        model.rename_item(&p1, 2, "Bee".into(), "second".into());
        assert!(model.processes[0].is_empty_slot(1));
        let renamed = model.processes[0].item_at(2).unwrap();
        assert_eq!(renamed.name, "Bee");
        assert_eq!(renamed.description, "second");
        assert_eq!(renamed.id, ItemId::new("b"));
    }
}
