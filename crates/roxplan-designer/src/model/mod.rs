//! Document model: placed elements, routes and plan metadata.

pub mod element;
pub mod plan;
pub mod route;

pub use element::{
    Element, ElementId, ElementKind, ExerciseType, FillStyle, NewElement, ShapeForm,
    MAX_Z_INDEX,
};
pub use plan::{Background, CanvasSettings, EventType, PlanMeta, DEFAULT_PLAN_NAME, LOCAL_USER_ID};
pub use route::{NewRoute, Route, RouteId, MIN_ROUTE_POINTS};
