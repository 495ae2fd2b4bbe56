use eframe::egui;

use crate::egui_app::forms::LoginField;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::Route;

const INPUT_WIDTH: f32 = 320.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);

        ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("Explore The Cosmos").size(32.0).strong());
        ui.add_space(6.0);
        ui.colored_label(colors::TEXT_SECONDARY, egui::RichText::new("Your Gateway to the Universe").size(16.0));
        ui.add_space(32.0);

        let email = ui.add_sized(
            [INPUT_WIDTH, 32.0],
            egui::TextEdit::singleline(&mut state.login_form.email)
                .hint_text("Enter your email")
                .text_color(colors::TEXT_LIGHT),
        );
        if email.changed() {
            state.login_form.changed(LoginField::Email);
        }
        if email.lost_focus() {
            state.handle_login_email_blur();
        }
        field_error(ui, state.login_form.visible_error(LoginField::Email));
        ui.add_space(10.0);

        let password = ui.add_sized(
            [INPUT_WIDTH, 32.0],
            egui::TextEdit::singleline(&mut state.login_form.password)
                .hint_text("Enter your password")
                .password(true)
                .text_color(colors::TEXT_LIGHT),
        );
        if password.changed() {
            state.login_form.changed(LoginField::Password);
        }
        if password.lost_focus() {
            state.login_form.blur(LoginField::Password);
        }
        let submit_on_enter = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        field_error(ui, state.login_form.visible_error(LoginField::Password));
        ui.add_space(20.0);

        let submitting = state.login_form.is_submitting();
        let sign_in = ui.add_enabled(
            !submitting,
            styles::primary_button("Sign In").min_size(egui::vec2(INPUT_WIDTH, 40.0)),
        );
        if sign_in.clicked() || submit_on_enter {
            state.handle_login();
        }
        if submitting {
            ui.add_space(10.0);
            ui.add(egui::Spinner::new().color(colors::GOLD));
        }
        ui.add_space(20.0);

        ui.horizontal(|ui| {
            let text_width = 260.0;
            ui.add_space((ui.available_width() - text_width).max(0.0) / 2.0);
            ui.colored_label(colors::TEXT_SECONDARY, "New to the cosmos?");
            if ui.link(egui::RichText::new("Create Account").color(colors::LINK)).clicked() {
                state.navigate(Route::Register);
            }
        });
    });
}

/// Red message under an input, if any
pub(super) fn field_error(ui: &mut egui::Ui, message: Option<&str>) {
    if let Some(message) = message {
        ui.add_space(4.0);
        ui.colored_label(colors::ERROR, egui::RichText::new(message).size(13.0));
    }
}
