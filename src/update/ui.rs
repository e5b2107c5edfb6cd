//! Mode handlers

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::BoardModel;

/// Handle UI messages
pub fn update_ui(model: &mut BoardModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::ToggleMode(mode) => {
            if model.mode == mode {
                return None;
            }
            tracing::info!(from = model.mode.label(), to = mode.label(), "mode changed");
            model.mode = mode;
            Some(Cmd::Redraw)
        }
    }
}
