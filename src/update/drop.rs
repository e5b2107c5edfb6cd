//! Drop resolution - maps (active drag, drop target) to model mutations
//!
//! Resolvers apply at most one recipe; `update_drop` then clears the drag context.

use crate::commands::Cmd;
use crate::messages::{DropMsg, DropTarget};
use crate::model::{BoardModel, EmptySlotDrag, ItemDrag, ProcessDrag, ProcessId};

/// Handle drop messages
///
/// The drag context is always cleared afterwards, whether or not anything
/// changed.
pub fn update_drop(model: &mut BoardModel, msg: DropMsg) -> Option<Cmd> {
    let was_dragging = model.drag.is_active();
    let changed = match msg {
        DropMsg::Item(target) => drop_process_item_on(model, target),
        DropMsg::EmptySlotInBin => drop_empty_item_to_bin(model),
        DropMsg::ProcessInBin => drop_process_to_bin(model),
    };

    model.drag.clear();

    if changed || was_dragging {
        Some(Cmd::Redraw)
    } else {
        None
    }
}

/// Resolve a dragged item onto `target`; returns whether a recipe ran
pub fn drop_process_item_on(model: &mut BoardModel, target: DropTarget) -> bool {
    let Some(drag) = model.drag.item_state().cloned() else {
        tracing::debug!(target: "drop", ?target, "item drop without an item drag");
        return false;
    };
    let ItemDrag {
        process_id: source_process,
        item,
        item_index: source_index,
        ..
    } = drag;

    match target {
        DropTarget::NewSlot { process_id } => {
            // Slot must exist before the item can be placed in it
            let Some(new_index) = model.add_item_slot(&process_id) else {
                return false;
            };
            model.add_item_to_process(new_index, item, &process_id);
            model.remove_item_from_process(source_index, &source_process);
            // Same process: the new slot was appended after the source, so the
            // source index is still valid
        }
        DropTarget::Bin => {
            model.remove_item_from_process(source_index, &source_process);
        }
        DropTarget::EmptySlot {
            process_id,
            slot_index,
        } => {
            if process_id == source_process && slot_index == source_index {
                return false;
            }
            if !slot_exists(model, &process_id, slot_index) {
                return false;
            }
            model.add_item_to_process(slot_index, item, &process_id);
            model.remove_item_from_process(source_index, &source_process);
        }
        DropTarget::ProcessItem {
            process_id,
            item: target_item,
            slot_index,
        } => {
            if !slot_exists(model, &process_id, slot_index) {
                return false;
            }
            // Each write is addressed by its own (process, index) pair, so this is
            // a swap even when both slots live in the same process
            model.add_item_to_process(source_index, target_item, &source_process);
            model.add_item_to_process(slot_index, item, &process_id);
        }
    }

    true
}

fn slot_exists(model: &BoardModel, process_id: &ProcessId, slot_index: usize) -> bool {
    model
        .process(process_id)
        .is_some_and(|p| slot_index < p.slot_count())
}

/// Delete the dragged empty slot
pub fn drop_empty_item_to_bin(model: &mut BoardModel) -> bool {
    let Some(EmptySlotDrag {
        process_id,
        item_index,
        ..
    }) = model.drag.empty_slot_state().cloned()
    else {
        tracing::debug!(target: "drop", "empty-slot drop without an empty-slot drag");
        return false;
    };

    model.remove_empty_slot(item_index, &process_id);
    true
}

/// Delete the dragged process
pub fn drop_process_to_bin(model: &mut BoardModel) -> bool {
    let Some(ProcessDrag { process_id, .. }) = model.drag.process_state().cloned() else {
        tracing::debug!(target: "drop", "process drop without a process drag");
        return false;
    };

    model.remove_process(&process_id);
    true
}
