//! Color Constants for the Workio Theme
//!
//! Warm amber-on-white palette matching the Workio brand.

use eframe::egui::Color32;

/// Page background - Off-white
pub const BG_LIGHT: Color32 = Color32::from_rgb(0xFD, 0xFB, 0xF7);

/// Top bar background - Deep charcoal
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);

/// Primary action - Amber
pub const ACCENT: Color32 = Color32::from_rgb(0xD9, 0x77, 0x06);

/// Primary heading text - Near black
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);

/// Secondary text - Gray
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);

/// Text on dark surfaces - Light
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF9, 0xFA, 0xFB);

/// Inline validation and failure text - Red
pub const ERROR: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);

/// Success notices - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x16, 0xA3, 0x4A);
