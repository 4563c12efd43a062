//! What the user has selected on the canvas.

use crate::model::{ElementId, RouteId};

/// At most one element or one route; never both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Element(ElementId),
    Route(RouteId),
}

impl Selection {
    pub fn element_id(&self) -> Option<&str> {
        match self {
            Self::Element(id) => Some(id),
            _ => None,
        }
    }

    pub fn route_id(&self) -> Option<&str> {
        match self {
            Self::Route(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
