//! Drag gesture lifecycle handlers

use crate::commands::Cmd;
use crate::messages::DragMsg;
use crate::model::{BoardModel, EmptySlotDrag, ItemDrag, ProcessDrag};

/// Handle drag messages
///
/// Mode is not checked here; viewer mode simply never offers drag handles.
/// Drag-end of any kind ends the single active gesture.
pub fn update_drag(model: &mut BoardModel, msg: DragMsg) -> Option<Cmd> {
    match msg {
        DragMsg::StartItem {
            process_id,
            item,
            item_index,
        } => {
            model.drag.set_item_state(ItemDrag {
                process_id,
                item,
                item_index,
                has_targeted: false,
            });
            Some(Cmd::Redraw)
        }

        DragMsg::StartEmptySlot {
            process_id,
            item_index,
        } => {
            model.drag.set_empty_slot_state(EmptySlotDrag {
                process_id,
                item_index,
                has_targeted: false,
            });
            Some(Cmd::Redraw)
        }

        DragMsg::StartProcess(process_id) => {
            model.drag.set_process_state(ProcessDrag {
                process_id,
                has_targeted: false,
            });
            Some(Cmd::Redraw)
        }

        DragMsg::EndItem | DragMsg::EndEmptySlot | DragMsg::EndProcess => {
            if !model.drag.is_active() {
                return None;
            }
            model.drag.clear();
            Some(Cmd::Redraw)
        }

        DragMsg::SetTargeting(has_targeted) => {
            if !model.drag.is_active() || model.drag.has_targeted() == has_targeted {
                return None;
            }
            model.drag.toggle_targeting(has_targeted);
            Some(Cmd::Redraw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProcessId;

    #[test]
    fn test_any_drag_end_clears_active_gesture() {
        let mut model = BoardModel::default();
        update_drag(&mut model, DragMsg::StartProcess(ProcessId::new("p1")));
        assert!(model.drag.is_active());

        assert_eq!(update_drag(&mut model, DragMsg::EndItem), Some(Cmd::Redraw));
        assert!(!model.drag.is_active());

        assert_eq!(update_drag(&mut model, DragMsg::EndProcess), None);
    }
}
