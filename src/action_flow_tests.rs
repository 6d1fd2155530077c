#[cfg(test)]
mod tests {
    use std::sync::mpsc::Receiver;
    use std::sync::Arc;

    use crate::adapters::{ChannelEventSink, MemoryClipboard, PageModel, PageSelectionDriver};
    use crate::core::models::{
        ActionEvent, ActionRequest, ClipAction, HorizontalAnchor, SurfaceOptions, TextDirection,
    };
    use crate::core::orchestrators::SelectionAction;
    use crate::core::ports::{ActionEventSink, ClipboardWriter, DocumentHost, SelectionDriver};

    struct PagePorts {
        page: Arc<PageModel>,
        clipboard: Arc<MemoryClipboard>,
        events: Receiver<ActionEvent>,
        sink: Arc<ChannelEventSink>,
    }

    impl PagePorts {
        fn build() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let (sink, events) = ChannelEventSink::build();
            Self {
                page: Arc::new(PageModel::build()),
                clipboard: Arc::new(MemoryClipboard::build()),
                events,
                sink: Arc::new(sink),
            }
        }

        fn run(&self, request: ActionRequest) -> SelectionAction {
            let driver = Arc::new(PageSelectionDriver::build(Arc::clone(&self.page)));
            SelectionAction::build(
                request,
                Arc::clone(&self.page) as Arc<dyn DocumentHost>,
                driver as Arc<dyn SelectionDriver>,
                Arc::clone(&self.clipboard) as Arc<dyn ClipboardWriter>,
                Arc::clone(&self.sink) as Arc<dyn ActionEventSink>,
            )
            .unwrap()
        }

        fn next_event(&self) -> ActionEvent {
            self.events.try_recv().unwrap()
        }
    }

    #[test]
    fn test_copy_from_target_end_to_end() {
        let ports = PagePorts::build();
        let target = ports.page.insert_element("hello world");

        let action = ports.run(ActionRequest::for_target(target));

        let event = ports.next_event();
        assert!(event.is_success());
        assert_eq!(event.action(), ClipAction::Copy);
        assert_eq!(event.text(), Some("hello world"));
        assert_eq!(action.selected_text(), "hello world");
        assert_eq!(
            ports.clipboard.last_write(),
            Some((ClipAction::Copy, "hello world".to_string()))
        );
        assert_eq!(
            ports.page.active_selection().as_deref(),
            Some("hello world")
        );
    }

    #[test]
    fn test_cut_from_supplied_text_end_to_end() {
        let ports = PagePorts::build();

        ports.run(ActionRequest::for_text("scratch note").with_action(ClipAction::Cut));

        let event = ports.next_event();
        assert!(event.is_success());
        assert_eq!(event.action(), ClipAction::Cut);
        assert_eq!(event.text(), Some("scratch note"));
        assert_eq!(
            ports.clipboard.last_write(),
            Some((ClipAction::Cut, "scratch note".to_string()))
        );
    }

    #[test]
    fn test_synthesized_surface_is_released_only_by_the_next_click() {
        let ports = PagePorts::build();

        ports.run(ActionRequest::for_text("hello"));

        // the surface and its selection stay live so a manual keyboard copy
        // still works before the next click
        assert_eq!(ports.page.attached_surface_count(), 1);
        assert_eq!(ports.page.observer_count(), 1);
        assert_eq!(ports.page.active_selection().as_deref(), Some("hello"));

        ports.page.dispatch_click();

        assert_eq!(ports.page.attached_surface_count(), 0);
        assert_eq!(ports.page.observer_count(), 0);

        // further clicks find nothing to release
        ports.page.dispatch_click();
        assert_eq!(ports.page.observer_count(), 0);
    }

    #[test]
    fn test_synthesized_surface_is_released_by_destroy() {
        let ports = PagePorts::build();

        let action = ports.run(ActionRequest::for_text("hello"));
        assert_eq!(ports.page.attached_surface_count(), 1);

        action.destroy();

        assert_eq!(ports.page.attached_surface_count(), 0);
        assert_eq!(ports.page.observer_count(), 0);

        // release already happened, the click observer is gone
        ports.page.dispatch_click();
        action.destroy();
        assert_eq!(ports.page.attached_surface_count(), 0);
    }

    #[test]
    fn test_surface_survives_dropping_the_action_until_the_next_click() {
        let ports = PagePorts::build();

        let action = ports.run(ActionRequest::for_text("hello"));
        drop(action);

        assert_eq!(ports.page.attached_surface_count(), 1);

        ports.page.dispatch_click();

        assert_eq!(ports.page.attached_surface_count(), 0);
        assert_eq!(ports.page.observer_count(), 0);
    }

    #[test]
    fn test_rebuilding_a_synthesized_selection_never_stacks_surfaces() {
        let ports = PagePorts::build();

        ports.run(ActionRequest::for_text("first"));
        ports.run(ActionRequest::for_text("second"));

        assert_eq!(ports.page.attached_surface_count(), 2);
        assert_eq!(ports.page.observer_count(), 2);

        // each surface is owned by its own action; one click releases both
        ports.page.dispatch_click();

        assert_eq!(ports.page.attached_surface_count(), 0);
        assert_eq!(ports.page.observer_count(), 0);
    }

    #[test]
    fn test_clipboard_rejection_reports_an_error_event_with_a_working_cleaner() {
        let ports = PagePorts::build();
        ports.clipboard.set_reject_writes(true);
        let target = ports.page.insert_element("unreachable");

        ports.run(ActionRequest::for_target(target));

        let event = ports.next_event();
        assert!(!event.is_success());
        assert_eq!(event.text(), None);
        assert_eq!(ports.page.focused_element(), Some(target));

        event.cleaner().clear();

        assert_eq!(ports.page.focused_element(), None);
        assert_eq!(ports.page.active_selection(), None);
    }

    #[test]
    fn test_cleaner_clears_selection_but_keeps_page_content() {
        let ports = PagePorts::build();
        let target = ports.page.insert_element("kept content");

        ports.run(ActionRequest::for_target(target));
        ports.next_event().cleaner().clear();

        assert_eq!(ports.page.active_selection(), None);
        assert_eq!(ports.page.element_text(target).as_deref(), Some("kept content"));
    }

    #[test]
    fn test_json_request_drives_the_surface_placement() {
        let ports = PagePorts::build();
        ports.page.set_scroll_offset(300);

        let json = r#"{
            "text": "مرحبا",
            "surface": { "direction": "rtl", "font_size_pt": 14 }
        }"#;
        let request: ActionRequest = serde_json::from_str(json).unwrap();

        let action = ports.run(request);
        assert_eq!(action.selected_text(), "مرحبا");
        assert_eq!(ports.page.active_selection().as_deref(), Some("مرحبا"));
        assert!(ports.next_event().is_success());

        // the synthesized surface is the only focused element on the page
        let element = ports.page.focused_element().unwrap();
        let spec = ports.page.surface_spec(element).unwrap();
        assert!(spec.read_only);
        assert_eq!(spec.top_px, 300);
        assert_eq!(spec.font_size_pt, 14);
        assert_eq!(spec.horizontal_anchor, HorizontalAnchor::OffViewportRight(-9999));
    }

    #[test]
    fn test_surface_options_roundtrip_through_the_request_wire_form() {
        let options = SurfaceOptions {
            direction: TextDirection::Rtl,
            font_size_pt: 16,
            offscreen_gutter_px: 4000,
        };
        let request = ActionRequest::for_text("hello").with_surface_options(options.clone());

        let serialized = serde_json::to_string(&request).unwrap();
        let deserialized: ActionRequest = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.surface, options);
        assert_eq!(deserialized.text.as_deref(), Some("hello"));
    }
}
