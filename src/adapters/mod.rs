mod event_sinks;
mod memory_clipboard;
mod page_model;
mod page_selection_driver;
mod system_clipboard;

pub use event_sinks::{ChannelEventSink, LogEventSink};
pub use memory_clipboard::MemoryClipboard;
pub use page_model::PageModel;
pub use page_selection_driver::PageSelectionDriver;
pub use system_clipboard::SystemClipboard;
