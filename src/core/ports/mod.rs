mod clipboard_writer;
mod document_host;
mod event_sink;
mod selection_driver;

pub use clipboard_writer::ClipboardWriter;
pub use document_host::{ClickObserver, DocumentHost};
pub use event_sink::ActionEventSink;
pub use selection_driver::SelectionDriver;
