//! Headless presentation layer: scripted board sessions
//!
//! A scenario is a YAML list of user gestures. Each step is translated into
//! exactly one inbound message, reading whatever the gesture would have read
//! from the screen (the dragged item, the hovered item) from the current model.
//!
//! ```yaml
//! steps:
//!   - op: toggle_mode
//!     mode: editor
//!   - op: create_process
//!     name: Build
//!   - op: add_slot
//!     process: 1
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::messages::{AppMsg, BoardMsg, DragMsg, DropMsg, DropTarget, Msg, UiMsg};
use crate::model::{BoardModel, DragKind, Mode, ProcessId, ProcessItem};
use crate::runtime::App;

/// How long a step may wait for its id requests
pub const STEP_TIMEOUT: Duration = Duration::from_secs(5);

/// A process id as written in a scenario (`1` and `"1"` are the same)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StepId {
    Number(u64),
    Text(String),
}

impl StepId {
    pub fn to_process_id(&self) -> ProcessId {
        match self {
            StepId::Number(n) => ProcessId::from(*n),
            StepId::Text(s) => ProcessId::new(s.clone()),
        }
    }
}

/// One user gesture
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    ToggleMode {
        mode: Mode,
    },
    CreateProcess {
        name: String,
    },
    CreateItem {
        process: StepId,
        slot: usize,
        name: String,
        #[serde(default)]
        description: String,
    },
    AddSlot {
        process: StepId,
    },
    RenameProcess {
        process: StepId,
        name: String,
    },
    RenameItem {
        process: StepId,
        slot: usize,
        name: String,
        #[serde(default)]
        description: String,
    },
    DragItem {
        process: StepId,
        slot: usize,
    },
    DragEmptySlot {
        process: StepId,
        slot: usize,
    },
    DragProcess {
        process: StepId,
    },
    Hover {
        targeted: bool,
    },
    DragEnd,
    DropOnNewSlot {
        process: StepId,
    },
    DropInBin,
    DropOnEmptySlot {
        process: StepId,
        slot: usize,
    },
    DropOnItem {
        process: StepId,
        slot: usize,
    },
    DropEmptySlotInBin,
    DropProcessInBin,
    Noop,
}

impl Step {
    /// Translate this gesture into the message the board understands
    ///
    /// Gestures on things that are not on screen (a missing item, say)
    /// become `AppMsg::Noop`.
    pub fn to_msg(&self, model: &BoardModel) -> Msg {
        match self {
            Step::ToggleMode { mode } => Msg::Ui(UiMsg::ToggleMode(*mode)),
            Step::CreateProcess { name } => {
                Msg::Board(BoardMsg::CreateProcess { name: name.clone() })
            }
            Step::CreateItem {
                process,
                slot,
                name,
                description,
            } => Msg::Board(BoardMsg::CreateItem {
                process_id: process.to_process_id(),
                prototype: ProcessItem::prototype(name.clone(), description.clone()),
                slot_index: *slot,
            }),
            Step::AddSlot { process } => {
                Msg::Board(BoardMsg::AddEmptySlot(process.to_process_id()))
            }
            Step::RenameProcess { process, name } => Msg::Board(BoardMsg::RenameProcess {
                process_id: process.to_process_id(),
                name: name.clone(),
            }),
            Step::RenameItem {
                process,
                slot,
                name,
                description,
            } => Msg::Board(BoardMsg::RenameItem {
                process_id: process.to_process_id(),
                slot_index: *slot,
                name: name.clone(),
                description: description.clone(),
            }),
            Step::DragItem { process, slot } => {
                let process_id = process.to_process_id();
                match model.item_at(&process_id, *slot) {
                    Some(item) => Msg::Drag(DragMsg::StartItem {
                        item: item.clone(),
                        process_id,
                        item_index: *slot,
                    }),
                    None => unresolved(self),
                }
            }
            Step::DragEmptySlot { process, slot } => {
                let process_id = process.to_process_id();
                let is_empty = model
                    .process(&process_id)
                    .is_some_and(|p| p.is_empty_slot(*slot));
                if is_empty {
                    Msg::Drag(DragMsg::StartEmptySlot {
                        process_id,
                        item_index: *slot,
                    })
                } else {
                    unresolved(self)
                }
            }
            Step::DragProcess { process } => {
                let process_id = process.to_process_id();
                if model.process(&process_id).is_some() {
                    Msg::Drag(DragMsg::StartProcess(process_id))
                } else {
                    unresolved(self)
                }
            }
            Step::Hover { targeted } => Msg::Drag(DragMsg::SetTargeting(*targeted)),
            Step::DragEnd => Msg::Drag(match model.drag.kind() {
                Some(DragKind::EmptySlot) => DragMsg::EndEmptySlot,
                Some(DragKind::Process) => DragMsg::EndProcess,
                Some(DragKind::Item) | None => DragMsg::EndItem,
            }),
            Step::DropOnNewSlot { process } => Msg::Drop(DropMsg::Item(DropTarget::NewSlot {
                process_id: process.to_process_id(),
            })),
            Step::DropInBin => Msg::Drop(DropMsg::Item(DropTarget::Bin)),
            Step::DropOnEmptySlot { process, slot } => {
                Msg::Drop(DropMsg::Item(DropTarget::EmptySlot {
                    process_id: process.to_process_id(),
                    slot_index: *slot,
                }))
            }
            Step::DropOnItem { process, slot } => {
                let process_id = process.to_process_id();
                match model.item_at(&process_id, *slot) {
                    Some(item) => Msg::Drop(DropMsg::Item(DropTarget::ProcessItem {
                        item: item.clone(),
                        process_id,
                        slot_index: *slot,
                    })),
                    None => unresolved(self),
                }
            }
            Step::DropEmptySlotInBin => Msg::Drop(DropMsg::EmptySlotInBin),
            Step::DropProcessInBin => Msg::Drop(DropMsg::ProcessInBin),
            Step::Noop => Msg::App(AppMsg::Noop),
        }
    }
}

fn unresolved(step: &Step) -> Msg {
    tracing::warn!(?step, "step refers to nothing on the board, skipping");
    Msg::App(AppMsg::Noop)
}

/// A scripted session
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn from_yaml(source: &str) -> Result<Self> {
        serde_yaml::from_str(source).context("Failed to parse scenario")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::from_yaml(&source).with_context(|| format!("In scenario {}", path.display()))
    }

    /// Play every step through `app`, waiting for id requests after each one
    ///
    /// `on_step` sees the board after each step has fully settled.
    pub fn run<F>(&self, app: &mut App, mut on_step: F) -> Result<()>
    where
        F: FnMut(usize, &Step, &BoardModel),
    {
        for (index, step) in self.steps.iter().enumerate() {
            let msg = step.to_msg(app.model());
            tracing::debug!(index, ?step, "scenario step");
            app.dispatch(msg);
            app.wait_idle(STEP_TIMEOUT)
                .with_context(|| format!("Step {} ({:?}) did not settle", index + 1, step))?;
            on_step(index, step, app.model());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps_with_numeric_and_text_ids() {
        let scenario = Scenario::from_yaml(
            r#"
steps:
  - op: toggle_mode
    mode: editor
  - op: add_slot
    process: 1
  - op: drop_on_empty_slot
    process: "p1"
    slot: 0
  - op: drop_in_bin
"#,
        )
        .unwrap();

        assert_eq!(
            scenario.steps,
            vec![
                Step::ToggleMode { mode: Mode::Editor },
                Step::AddSlot {
                    process: StepId::Number(1)
                },
                Step::DropOnEmptySlot {
                    process: StepId::Text("p1".to_string()),
                    slot: 0
                },
                Step::DropInBin,
            ]
        );
    }

    #[test]
    fn test_unknown_op_is_an_error() {
        assert!(Scenario::from_yaml("steps:\n  - op: juggle\n").is_err());
    }

    #[test]
    fn test_drag_of_missing_item_becomes_noop() {
        let model = BoardModel::default();
        let msg = Step::DragItem {
            process: StepId::Number(1),
            slot: 0,
        }
        .to_msg(&model);
        assert!(matches!(msg, Msg::App(AppMsg::Noop)));
    }
}
