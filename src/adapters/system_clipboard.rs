use anyhow::{Context, Result};

use crate::core::models::ClipAction;
use crate::core::ports::ClipboardWriter;
use crate::global_constants::LOG_TAG_CLIPBOARD;

pub struct SystemClipboard;

impl SystemClipboard {
    pub fn build() -> Self {
        Self
    }
}

impl ClipboardWriter for SystemClipboard {
    // Cut writes like copy at this boundary; system clipboards have no
    // destructive primitive for host-owned text. Hosts that own editable
    // content delete the selection when they observe a successful cut event.
    fn apply(&self, action: ClipAction, selected_text: &str) -> Result<bool> {
        let mut clipboard =
            arboard::Clipboard::new().context("failed to initialize the system clipboard")?;

        clipboard
            .set_text(selected_text.to_string())
            .with_context(|| format!("failed to {} text to the system clipboard", action))?;

        log::debug!(
            "{} {} placed {} characters on the system clipboard",
            LOG_TAG_CLIPBOARD,
            action,
            selected_text.chars().count()
        );

        Ok(true)
    }
}
