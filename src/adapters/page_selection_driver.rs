use std::sync::Arc;

use anyhow::Result;

use crate::adapters::PageModel;
use crate::core::models::ElementId;
use crate::core::ports::SelectionDriver;
use crate::global_constants::LOG_TAG_PAGE;

pub struct PageSelectionDriver {
    page: Arc<PageModel>,
}

impl PageSelectionDriver {
    pub fn build(page: Arc<PageModel>) -> Self {
        Self { page }
    }
}

impl SelectionDriver for PageSelectionDriver {
    fn select_all_text(&self, element: ElementId) -> Result<String> {
        let selected = self.page.select_element_text(element)?;
        log::debug!(
            "{} selected {} characters from element {}",
            LOG_TAG_PAGE,
            selected.chars().count(),
            element
        );
        Ok(selected)
    }
}
