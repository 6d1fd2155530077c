use std::sync::mpsc;
use std::sync::Mutex;

use crate::core::models::ActionEvent;
use crate::core::ports::ActionEventSink;
use crate::global_constants::LOG_TAG_EVENTS;

pub struct ChannelEventSink {
    sender: Mutex<mpsc::Sender<ActionEvent>>,
}

impl ChannelEventSink {
    pub fn build() -> (Self, mpsc::Receiver<ActionEvent>) {
        let (sender, receiver) = mpsc::channel();
        (
            Self {
                sender: Mutex::new(sender),
            },
            receiver,
        )
    }
}

impl ActionEventSink for ChannelEventSink {
    fn emit(&self, event: ActionEvent) {
        if self.sender.lock().unwrap().send(event).is_err() {
            log::debug!("{} receiver gone, dropping event", LOG_TAG_EVENTS);
        }
    }
}

pub struct LogEventSink;

impl ActionEventSink for LogEventSink {
    fn emit(&self, event: ActionEvent) {
        match &event {
            ActionEvent::Success { action, text, .. } => log::info!(
                "{} {}: {} captured {} characters",
                LOG_TAG_EVENTS,
                event.name(),
                action,
                text.chars().count()
            ),
            ActionEvent::Error { action, .. } => log::warn!(
                "{} {}: {} did not reach the clipboard",
                LOG_TAG_EVENTS,
                event.name(),
                action
            ),
        }
    }
}
