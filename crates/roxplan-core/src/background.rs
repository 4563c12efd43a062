//! Canvas background kinds shared by the document model and the settings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the canvas behind the plan is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    /// Reference grid
    #[default]
    Grid,
    /// Uploaded floor-plan or venue image
    Image,
    /// Plain canvas
    Blank,
}

impl BackgroundKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "grid" => Some(Self::Grid),
            "image" => Some(Self::Image),
            "blank" => Some(Self::Blank),
            _ => None,
        }
    }
}

impl fmt::Display for BackgroundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid => write!(f, "grid"),
            Self::Image => write!(f, "image"),
            Self::Blank => write!(f, "blank"),
        }
    }
}
