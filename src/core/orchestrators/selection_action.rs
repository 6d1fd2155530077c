use std::str::FromStr;
use std::sync::{Arc, Mutex};

use crate::core::errors::ConfigError;
use crate::core::models::{
    ActionEvent, ActionRequest, ClipAction, ElementId, ObserverId, SelectionCleaner,
    SurfaceOptions, SurfaceSpec,
};
use crate::core::ports::{ActionEventSink, ClipboardWriter, DocumentHost, SelectionDriver};
use crate::global_constants::LOG_TAG_ACTION;

enum SelectionSource {
    Synthesized { text: String },
    Direct { target: ElementId },
}

struct EphemeralSurface {
    element: ElementId,
    observer: ObserverId,
}

type EphemeralCell = Arc<Mutex<Option<EphemeralSurface>>>;

pub struct SelectionAction {
    host: Arc<dyn DocumentHost>,
    selected_text: String,
    ephemeral: EphemeralCell,
}

impl SelectionAction {
    pub fn build(
        request: ActionRequest,
        host: Arc<dyn DocumentHost>,
        selection_driver: Arc<dyn SelectionDriver>,
        clipboard: Arc<dyn ClipboardWriter>,
        event_sink: Arc<dyn ActionEventSink>,
    ) -> Result<Self, ConfigError> {
        let action = Self::resolve_action(request.action.as_deref())?;
        let target = Self::resolve_target(host.as_ref(), request.target)?;
        let source = Self::resolve_source(request.text, target)?;

        let mut instance = Self {
            host: Arc::clone(&host),
            selected_text: String::new(),
            ephemeral: Arc::new(Mutex::new(None)),
        };

        let captured = match &source {
            SelectionSource::Synthesized { text } => {
                log::info!(
                    "{} {} of supplied text through a synthesized selection",
                    LOG_TAG_ACTION,
                    action
                );
                instance.capture_synthesized_selection(
                    text,
                    &request.surface,
                    selection_driver.as_ref(),
                )
            }
            SelectionSource::Direct { target } => {
                log::info!(
                    "{} {} of element {} through a direct selection",
                    LOG_TAG_ACTION,
                    action,
                    target
                );
                instance.capture_direct_selection(*target, selection_driver.as_ref())
            }
        };

        // Clipboard and selection failures are expected environment
        // conditions; they surface through the error event, never as a panic
        // or a propagated error.
        let succeeded = match captured {
            Ok(selected_text) => {
                instance.selected_text = selected_text;
                match clipboard.apply(action, &instance.selected_text) {
                    Ok(applied) => applied,
                    Err(error) => {
                        log::warn!(
                            "{} {} failed at the clipboard boundary: {:#}",
                            LOG_TAG_ACTION,
                            action,
                            error
                        );
                        false
                    }
                }
            }
            Err(error) => {
                log::warn!("{} selection capture failed: {:#}", LOG_TAG_ACTION, error);
                false
            }
        };

        let cleaner = SelectionCleaner::bind(Arc::clone(&host), target);
        let event = if succeeded {
            ActionEvent::Success {
                action,
                text: instance.selected_text.clone(),
                trigger: request.trigger,
                cleaner,
            }
        } else {
            ActionEvent::Error {
                action,
                trigger: request.trigger,
                cleaner,
            }
        };

        log::debug!("{} emitting {} event", LOG_TAG_ACTION, event.name());
        event_sink.emit(event);

        Ok(instance)
    }

    pub fn selected_text(&self) -> &str {
        &self.selected_text
    }

    pub fn destroy(&self) {
        Self::release_ephemeral_surface(&self.host, &self.ephemeral);
    }

    fn resolve_action(action: Option<&str>) -> Result<ClipAction, ConfigError> {
        match action {
            None => Ok(ClipAction::default()),
            Some(action_name) => ClipAction::from_str(action_name),
        }
    }

    fn resolve_target(
        host: &dyn DocumentHost,
        target: Option<ElementId>,
    ) -> Result<Option<ElementId>, ConfigError> {
        match target {
            None => Ok(None),
            Some(element) if host.contains_element(element) => Ok(Some(element)),
            Some(_) => Err(ConfigError::InvalidTarget),
        }
    }

    fn resolve_source(
        text: Option<String>,
        target: Option<ElementId>,
    ) -> Result<SelectionSource, ConfigError> {
        match (text, target) {
            (Some(_), Some(_)) => Err(ConfigError::AmbiguousSource),
            // a supplied empty string still counts as a text source
            (Some(text), None) => Ok(SelectionSource::Synthesized { text }),
            (None, Some(target)) => Ok(SelectionSource::Direct { target }),
            (None, None) => Err(ConfigError::MissingSource),
        }
    }

    fn capture_synthesized_selection(
        &self,
        text: &str,
        options: &SurfaceOptions,
        selection_driver: &dyn SelectionDriver,
    ) -> anyhow::Result<String> {
        Self::release_ephemeral_surface(&self.host, &self.ephemeral);

        // The observer fires on the *next* click, not during this action, so
        // the user can still invoke the native keyboard copy against the live
        // selection before the surface is torn down.
        let host_for_release = Arc::clone(&self.host);
        let cell_for_release = Arc::clone(&self.ephemeral);
        let observer = self.host.register_click_observer(Box::new(move || {
            log::debug!(
                "{} click observed, releasing the ephemeral surface",
                LOG_TAG_ACTION
            );
            Self::release_ephemeral_surface(&host_for_release, &cell_for_release);
        }));

        let spec = SurfaceSpec::build_offscreen(text, options, self.host.scroll_offset_px());
        let element = match self.host.attach_surface(spec) {
            Ok(element) => element,
            Err(error) => {
                self.host.unregister_click_observer(observer);
                return Err(error);
            }
        };

        *self.ephemeral.lock().unwrap() = Some(EphemeralSurface { element, observer });

        selection_driver.select_all_text(element)
    }

    fn capture_direct_selection(
        &self,
        target: ElementId,
        selection_driver: &dyn SelectionDriver,
    ) -> anyhow::Result<String> {
        selection_driver.select_all_text(target)
    }

    // Firing the click observer and an explicit destroy() both funnel through
    // here; Option::take lets whichever runs first win and makes the other a
    // no-op.
    fn release_ephemeral_surface(host: &Arc<dyn DocumentHost>, cell: &EphemeralCell) {
        let surface = cell.lock().unwrap().take();
        if let Some(surface) = surface {
            host.unregister_click_observer(surface.observer);
            if let Err(error) = host.remove_element(surface.element) {
                log::warn!(
                    "{} failed to remove the ephemeral surface: {:#}",
                    LOG_TAG_ACTION,
                    error
                );
            }
        }
    }
}
