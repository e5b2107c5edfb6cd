//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use procboard::messages::{DragMsg, DropMsg, DropTarget, Msg};
use procboard::model::{BoardModel, ItemId, Mode, Process, ProcessId, ProcessItem, Slot};
use procboard::update::update;

/// Item with id `id` and an upper-cased name
pub fn item(id: &str) -> ProcessItem {
    ProcessItem::prototype(id.to_uppercase(), "").with_id(ItemId::new(id))
}

/// Process with id `id` and the given slots
pub fn process(id: &str, slots: Vec<Slot>) -> Process {
    Process::new(id.to_uppercase())
        .with_id(ProcessId::new(id))
        .with_slots(slots)
}

/// Editor-mode model holding the given processes
pub fn test_model(processes: Vec<Process>) -> BoardModel {
    BoardModel::new(Mode::Editor).with_processes(processes)
}

/// Two processes: p1 = [a, _, b], p2 = [c, _]
pub fn two_process_model() -> BoardModel {
    test_model(vec![
        process("p1", vec![Some(item("a")), None, Some(item("b"))]),
        process("p2", vec![Some(item("c")), None]),
    ])
}

pub fn pid(id: &str) -> ProcessId {
    ProcessId::new(id)
}

/// Slot contents of a process as item ids (`None` for empty slots)
pub fn slot_ids(model: &BoardModel, process_id: &str) -> Vec<Option<String>> {
    model
        .process(&pid(process_id))
        .expect("process exists")
        .items
        .iter()
        .map(|slot| slot.as_ref().map(|item| item.id.to_string()))
        .collect()
}

/// Shorthand for `slot_ids` expectations
pub fn ids(expected: &[Option<&str>]) -> Vec<Option<String>> {
    expected.iter().map(|s| s.map(str::to_string)).collect()
}

/// Start dragging the item currently in `process_id[slot]`
pub fn start_item_drag(model: &mut BoardModel, process_id: &str, slot: usize) {
    let item = model
        .item_at(&pid(process_id), slot)
        .cloned()
        .expect("slot is filled");
    update(
        model,
        Msg::Drag(DragMsg::StartItem {
            process_id: pid(process_id),
            item,
            item_index: slot,
        }),
    );
}

/// Drag the item in `from[from_slot]` and drop it on `target`
pub fn drag_and_drop(model: &mut BoardModel, from: &str, from_slot: usize, target: DropTarget) {
    start_item_drag(model, from, from_slot);
    update(model, Msg::Drop(DropMsg::Item(target)));
}

/// Drop target for the filled slot `process_id[slot]`
pub fn on_item(model: &BoardModel, process_id: &str, slot: usize) -> DropTarget {
    DropTarget::ProcessItem {
        process_id: pid(process_id),
        item: model
            .item_at(&pid(process_id), slot)
            .cloned()
            .expect("target slot is filled"),
        slot_index: slot,
    }
}
