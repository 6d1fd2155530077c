#![allow(dead_code)]

pub const DEFAULT_ACTION: &str = "copy";

pub const ACTION_NAME_COPY: &str = "copy";
pub const ACTION_NAME_CUT: &str = "cut";

pub const EVENT_NAME_SUCCESS: &str = "success";
pub const EVENT_NAME_ERROR: &str = "error";

pub const LOG_TAG_ACTION: &str = "[ACTION]";
pub const LOG_TAG_PAGE: &str = "[PAGE]";
pub const LOG_TAG_CLIPBOARD: &str = "[CLIPBOARD]";
pub const LOG_TAG_EVENTS: &str = "[EVENTS]";

pub const SURFACE_FONT_SIZE_PT: u16 = 12;
pub const SURFACE_OFFSCREEN_GUTTER_PX: i32 = 9999;
