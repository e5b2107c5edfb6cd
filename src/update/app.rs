//! Application handlers: allocator continuations and the explicit no-op

use crate::commands::{Cmd, PendingCreate};
use crate::messages::AppMsg;
use crate::model::{BoardModel, ItemId, Process, ProcessId};

/// Handle application messages
pub fn update_app(model: &mut BoardModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::IdAllocated { id, pending, .. } => {
            complete_create(model, id, pending);
            Some(Cmd::Redraw)
        }
        AppMsg::Noop => None,
    }
}

/// Build the pending entity with its freshly allocated id
pub fn complete_create(model: &mut BoardModel, id: u64, pending: PendingCreate) {
    match pending {
        PendingCreate::Process { name } => {
            let process = Process::new(name).with_id(ProcessId::from(id));
            tracing::debug!(process = %process.id, name = %process.name, "process created");
            model.add_process(process);
        }
        PendingCreate::Item {
            process_id,
            prototype,
            slot_index,
        } => {
            let item = prototype.with_id(ItemId::from(id));
            tracing::debug!(process = %process_id, item = %item.id, slot_index, "item created");
            model.add_item_to_process(slot_index, item, &process_id);
        }
    }
}
