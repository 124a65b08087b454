//! Shared colours for the overlay, matching the dark slate page theme.

use bevy_egui::egui::Color32;

pub const PAGE: Color32 = Color32::from_rgb(0x0f, 0x17, 0x2a);
pub const PANEL: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b);
pub const CARD: Color32 = Color32::from_rgb(0x33, 0x41, 0x55);
pub const BORDER: Color32 = Color32::from_rgb(0x47, 0x55, 0x69);
pub const TEXT: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0);
pub const MUTED: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8);
pub const IMPACT: Color32 = Color32::from_rgb(0xf9, 0x73, 0x16);
pub const DANGER: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub const SURVIVE: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
pub const TAG: Color32 = Color32::from_rgb(0xbf, 0xdb, 0xfe);
