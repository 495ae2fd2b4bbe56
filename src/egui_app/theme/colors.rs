//! Color Constants for the Cosmic Theme
//!
//! Near-black panels with a gold accent, matching a night-sky backdrop.

use eframe::egui::Color32;

/// Accent gold used for titles, buttons and the read counter
pub const GOLD: Color32 = Color32::from_rgb(0xE3, 0xA5, 0x38);

/// Lighter gold for hovered accent widgets
pub const GOLD_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xB8, 0x6E);

/// Translucent gold for outlined buttons and card borders
pub const GOLD_FAINT: Color32 = Color32::from_rgba_premultiplied(0x2D, 0x21, 0x0B, 0x33);

/// Main background
pub const BG_DARK: Color32 = Color32::from_rgb(0x05, 0x05, 0x0A);

/// Card background
pub const CARD_BG: Color32 = Color32::from_rgb(0x1A, 0x1A, 0x1A);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x0D, 0x0D, 0x14);

/// Modal background
pub const MODAL_BG: Color32 = Color32::from_rgb(0x0A, 0x0A, 0x0A);

/// Input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x22, 0x22, 0x2A);

/// Input border, and the divider inside the alert modal
pub const BORDER: Color32 = Color32::from_rgb(0x33, 0x33, 0x3A);

/// Primary text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Body text (muted white)
pub const TEXT_BODY: Color32 = Color32::from_rgb(0xE6, 0xE6, 0xE6);

/// Secondary text
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xCC, 0xCC, 0xCC);

/// Text on gold buttons
pub const TEXT_ON_GOLD: Color32 = Color32::from_rgb(0x05, 0x05, 0x0A);

/// Validation errors and the logout button
pub const ERROR: Color32 = Color32::from_rgb(0xFF, 0x3B, 0x30);

/// Inline links ("Create Account", "Sign In")
pub const LINK: Color32 = Color32::from_rgb(0x00, 0x7A, 0xFF);
