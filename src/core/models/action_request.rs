use serde::{Deserialize, Serialize};

use crate::core::models::{ClipAction, ElementId, SurfaceOptions};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionRequest {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub target: Option<ElementId>,
    #[serde(default)]
    pub trigger: Option<ElementId>,
    #[serde(default)]
    pub surface: SurfaceOptions,
}

impl ActionRequest {
    pub fn for_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn for_target(target: ElementId) -> Self {
        Self {
            target: Some(target),
            ..Self::default()
        }
    }

    pub fn with_action(mut self, action: ClipAction) -> Self {
        self.action = Some(action.to_string());
        self
    }

    pub fn with_trigger(mut self, trigger: ElementId) -> Self {
        self.trigger = Some(trigger);
        self
    }

    pub fn with_surface_options(mut self, surface: SurfaceOptions) -> Self {
        self.surface = surface;
        self
    }
}
