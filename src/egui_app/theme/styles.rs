//! Theme Styling Functions

use eframe::egui::{self, Color32, CornerRadius, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.window_fill = colors::MODAL_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::BORDER);
    style.visuals.panel_fill = colors::BG_DARK;
    style.visuals.extreme_bg_color = colors::INPUT_BG;
    style.visuals.hyperlink_color = colors::GOLD;

    style.visuals.widgets.noninteractive.bg_fill = colors::CARD_BG;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_BODY);

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.hovered.bg_fill = colors::GOLD_LIGHT;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_ON_GOLD);

    style.visuals.widgets.active.bg_fill = colors::GOLD;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_ON_GOLD);

    style.visuals.selection.bg_fill = colors::GOLD_FAINT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::GOLD);

    ctx.set_style(style);
}

/// Frame for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Frame for the central panel
pub fn main_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::BG_DARK)
        .inner_margin(egui::Margin::same(16))
}

/// Frame for the picture-of-the-day card and galaxy cards
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::GOLD_FAINT))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(14))
}

/// Frame for the alert modal
pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::MODAL_BG)
        .stroke(Stroke::new(1.0, colors::BORDER))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(20))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(160),
        })
}

/// Filled gold button
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text).color(colors::TEXT_ON_GOLD).strong())
        .fill(colors::GOLD)
        .stroke(Stroke::NONE)
        .corner_radius(CornerRadius::same(8))
}

/// Gold-outlined button for "Read More" / "Show Less"
pub fn outline_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text).color(colors::GOLD))
        .fill(colors::GOLD_FAINT)
        .stroke(Stroke::new(1.0, colors::GOLD))
        .corner_radius(CornerRadius::same(6))
}
