use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;

use crate::core::models::{ElementId, ObserverId, SurfaceSpec};
use crate::core::ports::{ClickObserver, DocumentHost};
use crate::global_constants::LOG_TAG_PAGE;

struct HostedElement {
    text: String,
    surface: Option<SurfaceSpec>,
}

#[derive(Default)]
struct PageState {
    elements: HashMap<ElementId, HostedElement>,
    click_observers: Vec<(ObserverId, Arc<dyn Fn() + Send + Sync>)>,
    scroll_offset_px: i32,
    active_selection: Option<String>,
    focused_element: Option<ElementId>,
}

#[derive(Default)]
pub struct PageModel {
    state: Mutex<PageState>,
}

impl PageModel {
    pub fn build() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap()
    }

    pub fn insert_element(&self, text: &str) -> ElementId {
        let element = ElementId::mint();
        self.state().elements.insert(
            element,
            HostedElement {
                text: text.to_string(),
                surface: None,
            },
        );
        log::debug!("{} inserted element {}", LOG_TAG_PAGE, element);
        element
    }

    pub fn element_text(&self, element: ElementId) -> Option<String> {
        self.state()
            .elements
            .get(&element)
            .map(|hosted| hosted.text.clone())
    }

    pub fn surface_spec(&self, element: ElementId) -> Option<SurfaceSpec> {
        self.state()
            .elements
            .get(&element)
            .and_then(|hosted| hosted.surface.clone())
    }

    pub fn attached_surface_count(&self) -> usize {
        self.state()
            .elements
            .values()
            .filter(|hosted| hosted.surface.is_some())
            .count()
    }

    pub fn set_scroll_offset(&self, offset_px: i32) {
        self.state().scroll_offset_px = offset_px;
    }

    pub fn focused_element(&self) -> Option<ElementId> {
        self.state().focused_element
    }

    pub fn observer_count(&self) -> usize {
        self.state().click_observers.len()
    }

    // Observers are snapshotted before being invoked, so an observer may
    // unregister itself (or anything else) without deadlocking the page.
    pub fn dispatch_click(&self) {
        let observers: Vec<Arc<dyn Fn() + Send + Sync>> = self
            .state()
            .click_observers
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        log::debug!(
            "{} dispatching click to {} observer(s)",
            LOG_TAG_PAGE,
            observers.len()
        );

        for observer in observers {
            observer();
        }
    }

    pub fn select_element_text(&self, element: ElementId) -> Result<String> {
        let mut state = self.state();
        let hosted = state
            .elements
            .get(&element)
            .ok_or_else(|| anyhow::anyhow!("element {} is not attached to the page", element))?;

        let text = hosted.text.clone();
        state.active_selection = Some(text.clone());
        state.focused_element = Some(element);
        Ok(text)
    }
}

impl DocumentHost for PageModel {
    fn attach_surface(&self, spec: SurfaceSpec) -> Result<ElementId> {
        let element = ElementId::mint();
        log::debug!(
            "{} attaching off-screen surface {} ({} characters)",
            LOG_TAG_PAGE,
            element,
            spec.content.chars().count()
        );
        self.state().elements.insert(
            element,
            HostedElement {
                text: spec.content.clone(),
                surface: Some(spec),
            },
        );
        Ok(element)
    }

    fn remove_element(&self, element: ElementId) -> Result<()> {
        let mut state = self.state();
        if state.elements.remove(&element).is_none() {
            anyhow::bail!("element {} is not attached to the page", element);
        }
        if state.focused_element == Some(element) {
            state.focused_element = None;
        }
        log::debug!("{} removed element {}", LOG_TAG_PAGE, element);
        Ok(())
    }

    fn contains_element(&self, element: ElementId) -> bool {
        self.state().elements.contains_key(&element)
    }

    fn register_click_observer(&self, observer: ClickObserver) -> ObserverId {
        let observer_id = ObserverId::mint();
        self.state()
            .click_observers
            .push((observer_id, Arc::from(observer)));
        log::debug!("{} registered click observer {}", LOG_TAG_PAGE, observer_id);
        observer_id
    }

    fn unregister_click_observer(&self, observer: ObserverId) {
        self.state()
            .click_observers
            .retain(|(registered, _)| *registered != observer);
        log::debug!("{} unregistered click observer {}", LOG_TAG_PAGE, observer);
    }

    fn scroll_offset_px(&self) -> i32 {
        self.state().scroll_offset_px
    }

    fn active_selection(&self) -> Option<String> {
        self.state().active_selection.clone()
    }

    fn clear_active_selection(&self) {
        self.state().active_selection = None;
    }

    fn blur_element(&self, element: ElementId) {
        let mut state = self.state();
        if state.focused_element == Some(element) {
            state.focused_element = None;
        }
    }
}
