use anyhow::Result;

use crate::core::models::{ElementId, ObserverId, SurfaceSpec};

pub type ClickObserver = Box<dyn Fn() + Send + Sync>;

pub trait DocumentHost: Send + Sync {
    fn attach_surface(&self, spec: SurfaceSpec) -> Result<ElementId>;

    fn remove_element(&self, element: ElementId) -> Result<()>;

    fn contains_element(&self, element: ElementId) -> bool;

    fn register_click_observer(&self, observer: ClickObserver) -> ObserverId;

    fn unregister_click_observer(&self, observer: ObserverId);

    fn scroll_offset_px(&self) -> i32;

    fn active_selection(&self) -> Option<String>;

    fn clear_active_selection(&self);

    fn blur_element(&self, element: ElementId);
}
