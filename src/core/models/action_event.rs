use std::sync::Arc;

use crate::core::models::{ClipAction, ElementId};
use crate::core::ports::DocumentHost;
use crate::global_constants::{EVENT_NAME_ERROR, EVENT_NAME_SUCCESS, LOG_TAG_EVENTS};

#[derive(Clone)]
pub struct SelectionCleaner {
    host: Arc<dyn DocumentHost>,
    target: Option<ElementId>,
}

impl SelectionCleaner {
    pub(crate) fn bind(host: Arc<dyn DocumentHost>, target: Option<ElementId>) -> Self {
        Self { host, target }
    }

    pub fn clear(&self) {
        if let Some(target) = self.target {
            log::debug!("{} blurring target element {}", LOG_TAG_EVENTS, target);
            self.host.blur_element(target);
        }
        self.host.clear_active_selection();
    }
}

impl std::fmt::Debug for SelectionCleaner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionCleaner")
            .field("target", &self.target)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub enum ActionEvent {
    Success {
        action: ClipAction,
        text: String,
        trigger: Option<ElementId>,
        cleaner: SelectionCleaner,
    },
    Error {
        action: ClipAction,
        trigger: Option<ElementId>,
        cleaner: SelectionCleaner,
    },
}

impl ActionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ActionEvent::Success { .. } => EVENT_NAME_SUCCESS,
            ActionEvent::Error { .. } => EVENT_NAME_ERROR,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ActionEvent::Success { .. })
    }

    pub fn action(&self) -> ClipAction {
        match self {
            ActionEvent::Success { action, .. } | ActionEvent::Error { action, .. } => *action,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            ActionEvent::Success { text, .. } => Some(text),
            ActionEvent::Error { .. } => None,
        }
    }

    pub fn trigger(&self) -> Option<ElementId> {
        match self {
            ActionEvent::Success { trigger, .. } | ActionEvent::Error { trigger, .. } => *trigger,
        }
    }

    pub fn cleaner(&self) -> &SelectionCleaner {
        match self {
            ActionEvent::Success { cleaner, .. } | ActionEvent::Error { cleaner, .. } => cleaner,
        }
    }
}
