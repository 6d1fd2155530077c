pub mod adapters;
pub mod core;
pub mod global_constants;

#[cfg(test)]
mod action_flow_tests;

pub use crate::core::errors::ConfigError;
pub use crate::core::models::{
    ActionEvent, ActionRequest, ClipAction, ElementId, HorizontalAnchor, ObserverId,
    SelectionCleaner, SurfaceOptions, SurfaceSpec, TextDirection,
};
pub use crate::core::orchestrators::SelectionAction;
pub use crate::core::ports::{
    ActionEventSink, ClickObserver, ClipboardWriter, DocumentHost, SelectionDriver,
};
