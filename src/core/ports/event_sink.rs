use crate::core::models::ActionEvent;

pub trait ActionEventSink: Send + Sync {
    fn emit(&self, event: ActionEvent);
}
