//! Color constants for the page sections and diagram strokes.

use eframe::egui::Color32;

// Page backgrounds
pub const PAGE_BLACK: Color32 = Color32::from_rgb(10, 10, 10);
pub const LOCATION_BROWN: Color32 = Color32::from_rgb(24, 23, 18);
pub const PAPER_BEIGE: Color32 = Color32::from_rgb(245, 241, 235);

// Foreground text
pub const TEXT_WHITE: Color32 = Color32::from_rgb(235, 235, 235);
pub const TEXT_LIGHT_GRAY: Color32 = Color32::from_rgb(232, 232, 232);
pub const TEXT_GRAY: Color32 = Color32::from_rgb(153, 153, 153);
pub const TEXT_BEIGE: Color32 = Color32::from_rgb(235, 226, 210);

// Diagram
pub const WIREFRAME_STROKE: Color32 = Color32::from_rgba_premultiplied(242, 242, 242, 242);
pub const STAGE_LABEL_DIM: Color32 = Color32::from_rgba_premultiplied(77, 77, 77, 77);
pub const ZOOM_RAIL: Color32 = Color32::from_rgba_premultiplied(77, 77, 77, 77);

// Media placeholder shown while an asset loads or after it fails
pub const MEDIA_PLACEHOLDER: Color32 = Color32::from_rgb(26, 26, 26);
pub const MEDIA_PLACEHOLDER_LIGHT: Color32 = Color32::from_rgb(214, 209, 200);
