//! Editor tools and keyboard commands.

use std::fmt;

/// The tool the pointer currently acts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTool {
    #[default]
    Select,
    DrawRoute,
    DrawShape,
    AddElement,
    Text,
    Eraser,
}

impl fmt::Display for ActiveTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select => write!(f, "select"),
            Self::DrawRoute => write!(f, "draw_route"),
            Self::DrawShape => write!(f, "draw_shape"),
            Self::AddElement => write!(f, "add_element"),
            Self::Text => write!(f, "text"),
            Self::Eraser => write!(f, "eraser"),
        }
    }
}

/// Keyboard-level editor commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    Undo,
    Redo,
    DeleteSelection,
    DuplicateSelection,
}

impl EditorCommand {
    /// Maps a key press to a command.
    ///
    /// `key` is the logical key name as reported by the host (`"z"`,
    /// `"Delete"`, ...). `ctrl` covers both Ctrl and Cmd.
    pub fn from_key(key: &str, ctrl: bool, shift: bool) -> Option<Self> {
        match key {
            "Delete" | "Backspace" if !ctrl => Some(Self::DeleteSelection),
            k if ctrl && k.eq_ignore_ascii_case("z") => {
                if shift {
                    Some(Self::Redo)
                } else {
                    Some(Self::Undo)
                }
            }
            k if ctrl && k.eq_ignore_ascii_case("d") => Some(Self::DuplicateSelection),
            _ => None,
        }
    }
}
