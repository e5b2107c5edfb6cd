//! Creation and structural editing handlers

use crate::commands::{Cmd, PendingCreate};
use crate::messages::BoardMsg;
use crate::model::BoardModel;

/// Handle board messages
///
/// Creation never touches the model directly: it asks for an id and the
/// entity is built when the allocator answers (see `update_app`).
pub fn update_board(model: &mut BoardModel, msg: BoardMsg) -> Option<Cmd> {
    match msg {
        BoardMsg::CreateProcess { name } => {
            Some(Cmd::AllocateId(PendingCreate::Process { name }))
        }

        BoardMsg::CreateItem {
            process_id,
            prototype,
            slot_index,
        } => Some(Cmd::AllocateId(PendingCreate::Item {
            process_id,
            prototype,
            slot_index,
        })),

        BoardMsg::AddEmptySlot(process_id) => {
            let index = model.add_item_slot(&process_id)?;
            tracing::debug!(process = %process_id, index, "empty slot added");
            Some(Cmd::Redraw)
        }

        BoardMsg::RenameProcess { process_id, name } => {
            if !model.mode.is_editor() {
                return None;
            }
            model.rename_process(&process_id, name);
            Some(Cmd::Redraw)
        }

        BoardMsg::RenameItem {
            process_id,
            slot_index,
            name,
            description,
        } => {
            if !model.mode.is_editor() {
                return None;
            }
            model.rename_item(&process_id, slot_index, name, description);
            Some(Cmd::Redraw)
        }
    }
}
