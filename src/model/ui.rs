//! UI mode and the editing affordances it implies

use serde::{Deserialize, Serialize};

/// Board-wide interaction mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Read-only: empty slots hidden, no editing affordances
    #[default]
    Viewer,
    /// Full editing: drag handles, bin, add buttons, editable names
    Editor,
}

impl Mode {
    pub fn is_editor(self) -> bool {
        matches!(self, Mode::Editor)
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Viewer => "viewer",
            Mode::Editor => "editor",
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "viewer" | "view" => Ok(Mode::Viewer),
            "editor" | "edit" => Ok(Mode::Editor),
            other => Err(format!("Unknown mode '{}', expected viewer or editor", other)),
        }
    }
}

/// What the presentation layer should offer for a given mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub show_empty_slots: bool,
    pub show_add_slot: bool,
    pub show_add_process: bool,
    pub show_bin: bool,
    pub draggable: bool,
    pub editable_names: bool,
}

impl Affordances {
    pub fn for_mode(mode: Mode) -> Self {
        let editing = mode.is_editor();
        Self {
            show_empty_slots: editing,
            show_add_slot: editing,
            show_add_process: editing,
            show_bin: editing,
            draggable: editing,
            editable_names: editing,
        }
    }
}
