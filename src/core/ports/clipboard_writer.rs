use anyhow::Result;

use crate::core::models::ClipAction;

pub trait ClipboardWriter: Send + Sync {
    fn apply(&self, action: ClipAction, selected_text: &str) -> Result<bool>;
}
