//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod board;
mod drag;
pub mod drop;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::BoardModel;

#[cfg(debug_assertions)]
use crate::tracing::BoardSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, warn, Level};

pub use app::{complete_create, update_app};
pub use board::update_board;
pub use drag::update_drag;
pub use drop::update_drop;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut BoardModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut BoardModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Ui(m) => update_ui(model, m),
        Msg::Board(m) => update_board(model, m),
        Msg::Drag(m) => update_drag(model, m),
        Msg::Drop(m) => update_drop(model, m),
        Msg::App(m) => update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after board shape and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut BoardModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::DragMsg;

    // Hover flips fire on every pointer move over a target
    let is_noisy = matches!(&msg, Msg::Drag(DragMsg::SetTargeting(_)));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = BoardSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = BoardSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "board", %diff, "state changed");
    }

    for violation in model.invariant_violations() {
        warn!(target: "board", msg = %msg_name, %violation, "invariant violated");
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Ui::ToggleMode(Editor)`
/// - `Drop::EmptySlotInBin`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::Board(m) => format!("Board::{:?}", m),
        Msg::Drag(m) => format!("Drag::{:?}", m),
        Msg::Drop(m) => format!("Drop::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
