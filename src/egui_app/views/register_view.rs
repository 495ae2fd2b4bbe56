use eframe::egui;

use super::login_view::field_error;
use crate::egui_app::forms::RegisterField;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::Route;

const INPUT_WIDTH: f32 = 320.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("Create an Account").size(30.0).strong());
            ui.add_space(28.0);

            for field in RegisterField::ALL {
                let response = ui.add_sized(
                    [INPUT_WIDTH, 32.0],
                    egui::TextEdit::singleline(state.register_form.value_mut(field))
                        .hint_text(field.placeholder())
                        .password(field.is_secret())
                        .text_color(colors::TEXT_LIGHT),
                );
                if response.changed() {
                    state.register_form.changed(field);
                }
                if response.lost_focus() {
                    state.handle_register_blur(field);
                }
                field_error(ui, state.register_form.visible_error(field));
                ui.add_space(10.0);
            }

            ui.add_space(10.0);
            let submitting = state.register_form.is_submitting();
            let register = ui.add_enabled(
                !submitting,
                styles::primary_button("Register").min_size(egui::vec2(INPUT_WIDTH, 40.0)),
            );
            if register.clicked() {
                state.handle_register();
            }
            if submitting {
                ui.add_space(10.0);
                ui.add(egui::Spinner::new().color(colors::GOLD));
            }
            ui.add_space(20.0);

            ui.horizontal(|ui| {
                let text_width = 240.0;
                ui.add_space((ui.available_width() - text_width).max(0.0) / 2.0);
                ui.colored_label(colors::TEXT_SECONDARY, "Already have an account?");
                if ui.link(egui::RichText::new("Sign In").color(colors::LINK)).clicked() {
                    state.navigate(Route::Login);
                }
            });
            ui.add_space(40.0);
        });
    });
}
