use anyhow::Result;

use crate::core::models::ElementId;

pub trait SelectionDriver: Send + Sync {
    fn select_all_text(&self, element: ElementId) -> Result<String>;
}
