use serde::{Deserialize, Serialize};

use crate::global_constants;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl Default for TextDirection {
    fn default() -> Self {
        TextDirection::Ltr
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SurfaceOptions {
    #[serde(default)]
    pub direction: TextDirection,
    #[serde(default = "default_font_size_pt")]
    pub font_size_pt: u16,
    #[serde(default = "default_offscreen_gutter_px")]
    pub offscreen_gutter_px: i32,
}

fn default_font_size_pt() -> u16 {
    global_constants::SURFACE_FONT_SIZE_PT
}

fn default_offscreen_gutter_px() -> i32 {
    global_constants::SURFACE_OFFSCREEN_GUTTER_PX
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            direction: TextDirection::default(),
            font_size_pt: default_font_size_pt(),
            offscreen_gutter_px: default_offscreen_gutter_px(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    OffViewportLeft(i32),
    OffViewportRight(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSpec {
    pub content: String,
    pub read_only: bool,
    pub font_size_pt: u16,
    pub horizontal_anchor: HorizontalAnchor,
    pub top_px: i32,
}

impl SurfaceSpec {
    // Read-only so the surface never summons an on-screen keyboard; anchored
    // at the current scroll offset so attaching it never scrolls the page.
    pub fn build_offscreen(
        content: &str,
        options: &SurfaceOptions,
        scroll_offset_px: i32,
    ) -> Self {
        let horizontal_anchor = match options.direction {
            TextDirection::Ltr => HorizontalAnchor::OffViewportLeft(-options.offscreen_gutter_px),
            TextDirection::Rtl => HorizontalAnchor::OffViewportRight(-options.offscreen_gutter_px),
        };

        Self {
            content: content.to_string(),
            read_only: true,
            font_size_pt: options.font_size_pt,
            horizontal_anchor,
            top_px: scroll_offset_px,
        }
    }
}
