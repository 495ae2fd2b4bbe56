use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::Route;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(100.0);

        ui.colored_label(colors::GOLD, egui::RichText::new("EA").size(56.0).strong());
        ui.add_space(24.0);

        ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("Explore the Universe").size(36.0).strong());
        ui.add_space(10.0);
        ui.colored_label(
            colors::TEXT_SECONDARY,
            egui::RichText::new("Discover celestial wonders and embark on an astronomical journey").size(18.0),
        );
        ui.add_space(48.0);

        let button = styles::primary_button("Begin Your Journey").min_size(egui::vec2(240.0, 50.0));
        if ui.add(button).clicked() {
            state.navigate(Route::Login);
        }
    });
}
