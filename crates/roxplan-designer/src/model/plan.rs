use chrono::{DateTime, Utc};
use roxplan_core::BackgroundKind;
use roxplan_settings::CanvasDefaults;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Event format the plan is laid out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Hyrox,
    Crossfit,
    #[serde(other)]
    Custom,
}

impl EventType {
    /// Parses a stored event type. Unknown names are `Custom`; an empty
    /// name is the default.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "" => Self::default(),
            "hyrox" => Self::Hyrox,
            "crossfit" => Self::Crossfit,
            _ => Self::Custom,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hyrox => write!(f, "hyrox"),
            Self::Crossfit => write!(f, "crossfit"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// Plan identity and descriptive metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanMeta {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub event_type: EventType,
    pub description: Option<String>,
    pub is_public: bool,
    pub thumbnail: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const DEFAULT_PLAN_NAME: &str = "Untitled";
pub const LOCAL_USER_ID: &str = "local";

impl PlanMeta {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: LOCAL_USER_ID.to_string(),
            name: name.into(),
            event_type: EventType::default(),
            description: None,
            is_public: false,
            thumbnail: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for PlanMeta {
    fn default() -> Self {
        Self::new(DEFAULT_PLAN_NAME)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub kind: BackgroundKind,
    pub image_url: Option<String>,
    /// 0-100, unlike element opacity which is 0-1
    pub opacity: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSettings {
    pub width: u32,
    pub height: u32,
    pub background: Background,
}

impl From<&CanvasDefaults> for CanvasSettings {
    fn from(defaults: &CanvasDefaults) -> Self {
        Self {
            width: defaults.width,
            height: defaults.height,
            background: Background {
                kind: defaults.background,
                image_url: None,
                opacity: defaults.background_opacity.min(100),
            },
        }
    }
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self::from(&CanvasDefaults::default())
    }
}
