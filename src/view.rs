//! Plain-text rendering of the board
//!
//! Follows the same contract a graphical front end would: viewer mode hides
//! empty slots and every editing affordance.

use std::fmt::Write;

use crate::model::{Affordances, BoardModel, DragContext, DragKind, Process};

const EMPTY_SLOT: &str = "·";

/// Render the whole board
pub fn render_board(model: &BoardModel) -> String {
    let affordances = model.affordances();
    let mut out = String::new();

    let _ = writeln!(out, "mode: {}", model.mode.label());

    for process in &model.processes {
        render_process(&mut out, model, process, &affordances);
    }

    if affordances.show_add_process {
        out.push_str("[+ process]\n");
    }

    if affordances.show_bin {
        let hover = match &model.drag {
            DragContext::None => "",
            _ if model.drag.has_targeted() => " (hover)",
            _ => " (dragging)",
        };
        let _ = writeln!(out, "[bin]{}", hover);
    }

    out
}

fn render_process(out: &mut String, model: &BoardModel, process: &Process, a: &Affordances) {
    let is_source = model.drag.source_process() == Some(&process.id);
    let dragged = is_source && model.drag.kind() == Some(DragKind::Process);
    let marker = if dragged { "*" } else { "" };
    let _ = writeln!(out, "{}{} [{}]", marker, process.name, process.id);

    for (index, slot) in process.items.iter().enumerate() {
        let marker = if is_source && model.drag.source_slot() == Some(index) {
            "*"
        } else {
            " "
        };

        match slot {
            Some(item) if item.description.is_empty() => {
                let _ = writeln!(out, " {}{}: {} [{}]", marker, index, item.name, item.id);
            }
            Some(item) => {
                let _ = writeln!(
                    out,
                    " {}{}: {} [{}] - {}",
                    marker, index, item.name, item.id, item.description
                );
            }
            None if a.show_empty_slots => {
                let _ = writeln!(out, " {}{}: {}", marker, index, EMPTY_SLOT);
            }
            None => {}
        }
    }

    if a.show_add_slot {
        out.push_str("  [+ slot]\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EmptySlotDrag, ItemId, Mode, ProcessDrag, ProcessId, ProcessItem};

    fn model(mode: Mode) -> BoardModel {
        BoardModel::new(mode).with_processes(vec![Process::new("P")
            .with_id(ProcessId::new("p1"))
            .with_slots(vec![
                None,
                Some(ProcessItem::prototype("A", "first").with_id(ItemId::new("a1"))),
            ])])
    }

    #[test]
    fn test_viewer_hides_empty_slots_and_affordances() {
        let text = render_board(&model(Mode::Viewer));
        assert_eq!(text, "mode: viewer\nP [p1]\n  1: A [a1] - first\n");
    }

    #[test]
    fn test_editor_shows_everything() {
        let text = render_board(&model(Mode::Editor));
        assert!(text.contains("  0: ·"));
        assert!(text.contains("[+ slot]"));
        assert!(text.contains("[+ process]"));
        assert!(text.contains("[bin]\n"));
    }

    #[test]
    fn test_drag_source_is_marked() {
        let mut board = model(Mode::Editor);
        board.drag.set_empty_slot_state(EmptySlotDrag {
            process_id: ProcessId::new("p1"),
            item_index: 0,
            has_targeted: true,
        });
        let text = render_board(&board);
        assert!(text.contains("P [p1]\n *0: ·\n  1: A [a1]"));
        assert!(text.contains("[bin] (hover)"));

        board.drag.set_process_state(ProcessDrag {
            process_id: ProcessId::new("p1"),
            has_targeted: false,
        });
        let text = render_board(&board);
        assert!(text.contains("*P [p1]\n  0: ·\n"));
        assert!(text.contains("[bin] (dragging)"));
    }
}
