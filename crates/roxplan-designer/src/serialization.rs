//! Plan record serialization.
//!
//! The plan record is the JSON shape exchanged with every persistence
//! backend. Field names are camelCase. `backgroundOpacity` is an integer on
//! the 0-100 scale while element `opacity` is a float on the 0-1 scale.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use roxplan_core::BackgroundKind;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::model::{
    Background, CanvasSettings, Element, EventType, PlanMeta, Route, DEFAULT_PLAN_NAME,
    LOCAL_USER_ID,
};

fn default_user_id() -> String {
    LOCAL_USER_ID.to_string()
}

fn default_canvas_width() -> u32 {
    1200
}

fn default_canvas_height() -> u32 {
    800
}

fn default_background_opacity() -> u8 {
    100
}

// Records written by older clients carry `null` (and sometimes `""`) where a
// value was never set. Those load as the defaults.

fn event_type_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<EventType, D::Error> {
    let name = Option::<String>::deserialize(d)?;
    Ok(name.as_deref().map(EventType::from_name).unwrap_or_default())
}

fn background_kind_or_default<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<BackgroundKind, D::Error> {
    let name = Option::<String>::deserialize(d)?;
    let kind = match name.as_deref().map(str::trim) {
        None | Some("") => BackgroundKind::default(),
        Some(other) => BackgroundKind::from_name(other).unwrap_or_else(|| {
            tracing::warn!("Unknown background type '{}', using grid", other);
            BackgroundKind::default()
        }),
    };
    Ok(kind)
}

fn background_opacity_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<u8, D::Error> {
    Ok(Option::<u8>::deserialize(d)?.unwrap_or_else(default_background_opacity))
}

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Complete persisted plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord {
    pub id: String,
    #[serde(default = "default_user_id")]
    pub user_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "event_type_or_default")]
    pub event_type: EventType,
    #[serde(default = "default_canvas_width")]
    pub canvas_width: u32,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: u32,
    #[serde(default, deserialize_with = "background_kind_or_default")]
    pub background_type: BackgroundKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image_url: Option<String>,
    #[serde(
        default = "default_background_opacity",
        deserialize_with = "background_opacity_or_default"
    )]
    pub background_opacity: u8,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One line of the plan list
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummary {
    pub id: String,
    pub name: String,
    pub event_type: EventType,
    pub element_count: usize,
    pub station_count: usize,
    pub route_count: usize,
    pub updated_at: DateTime<Utc>,
}

impl PlanRecord {
    /// A fresh plan: new id, default canvas, empty collections.
    pub fn new_blank(name: impl Into<String>) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            DEFAULT_PLAN_NAME.to_string()
        } else {
            name
        };
        Self::from_parts(
            &PlanMeta::new(name),
            &CanvasSettings::default(),
            Vec::new(),
            Vec::new(),
        )
    }

    pub fn from_parts(
        meta: &PlanMeta,
        canvas: &CanvasSettings,
        elements: Vec<Element>,
        routes: Vec<Route>,
    ) -> Self {
        Self {
            id: meta.id.clone(),
            user_id: meta.user_id.clone(),
            name: meta.name.clone(),
            description: meta.description.clone(),
            event_type: meta.event_type,
            canvas_width: canvas.width,
            canvas_height: canvas.height,
            background_type: canvas.background.kind,
            background_image_url: canvas.background.image_url.clone(),
            background_opacity: canvas.background.opacity,
            elements,
            routes,
            is_public: meta.is_public,
            thumbnail: meta.thumbnail.clone(),
            created_at: meta.created_at,
            updated_at: meta.updated_at,
        }
    }

    pub fn meta(&self) -> PlanMeta {
        PlanMeta {
            id: self.id.clone(),
            user_id: self.user_id.clone(),
            name: self.name.clone(),
            event_type: self.event_type,
            description: self.description.clone(),
            is_public: self.is_public,
            thumbnail: self.thumbnail.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Canvas configuration; background opacity is clamped to 100.
    pub fn canvas(&self) -> CanvasSettings {
        CanvasSettings {
            width: self.canvas_width,
            height: self.canvas_height,
            background: Background {
                kind: self.background_type,
                image_url: self.background_image_url.clone(),
                opacity: self.background_opacity.min(100),
            },
        }
    }

    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            event_type: self.event_type,
            element_count: self.elements.len(),
            station_count: self.elements.iter().filter(|e| e.is_station()).count(),
            route_count: self.routes.len(),
            updated_at: self.updated_at,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize plan")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse plan")
    }

    /// Save plan to a JSON file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write plan file {}", path.display()))?;
        tracing::info!("Saved plan '{}' to {}", self.name, path.display());
        Ok(())
    }

    /// Load plan from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan file {}", path.display()))?;
        let record = Self::from_json(&content)?;
        tracing::info!("Loaded plan '{}' from {}", record.name, path.display());
        Ok(record)
    }
}
