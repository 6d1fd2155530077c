use std::sync::Mutex;

use anyhow::Result;

use crate::core::models::ClipAction;
use crate::core::ports::ClipboardWriter;

#[derive(Default)]
struct MemoryClipboardState {
    writes: Vec<(ClipAction, String)>,
    reject_writes: bool,
    fail_with_error: bool,
}

#[derive(Default)]
pub struct MemoryClipboard {
    state: Mutex<MemoryClipboardState>,
}

impl MemoryClipboard {
    pub fn build() -> Self {
        Self::default()
    }

    pub fn set_reject_writes(&self, reject: bool) {
        self.state.lock().unwrap().reject_writes = reject;
    }

    pub fn set_fail_with_error(&self, fail: bool) {
        self.state.lock().unwrap().fail_with_error = fail;
    }

    pub fn writes(&self) -> Vec<(ClipAction, String)> {
        self.state.lock().unwrap().writes.clone()
    }

    pub fn last_write(&self) -> Option<(ClipAction, String)> {
        self.state.lock().unwrap().writes.last().cloned()
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn apply(&self, action: ClipAction, selected_text: &str) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        if state.fail_with_error {
            anyhow::bail!("memory clipboard scripted to fail");
        }
        if state.reject_writes {
            return Ok(false);
        }
        state.writes.push((action, selected_text.to_string()));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_records_the_write() {
        let clipboard = MemoryClipboard::build();

        let applied = clipboard.apply(ClipAction::Copy, "hello").unwrap();

        assert!(applied);
        assert_eq!(
            clipboard.last_write(),
            Some((ClipAction::Copy, "hello".to_string()))
        );
    }

    #[test]
    fn test_rejected_writes_return_false_without_recording() {
        let clipboard = MemoryClipboard::build();
        clipboard.set_reject_writes(true);

        let applied = clipboard.apply(ClipAction::Cut, "hello").unwrap();

        assert!(!applied);
        assert!(clipboard.writes().is_empty());
    }

    #[test]
    fn test_scripted_failure_returns_an_error() {
        let clipboard = MemoryClipboard::build();
        clipboard.set_fail_with_error(true);

        let result = clipboard.apply(ClipAction::Copy, "hello");

        assert!(result.is_err());
    }
}
