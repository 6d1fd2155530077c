mod action_event;
mod action_request;
mod clip_action;
mod element;
mod surface;

pub use action_event::{ActionEvent, SelectionCleaner};
pub use action_request::ActionRequest;
pub use clip_action::ClipAction;
pub use element::{ElementId, ObserverId};
pub use surface::{HorizontalAnchor, SurfaceOptions, SurfaceSpec, TextDirection};
