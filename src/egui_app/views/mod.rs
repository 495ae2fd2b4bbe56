use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::Route;

pub mod home_view;
pub mod landing_view;
pub mod login_view;
pub mod register_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Home is entered by replace, so there is nothing behind it
                let can_go_back = state.navigator.can_go_back() && state.current_route() != Route::Home;
                if can_go_back && ui.button("⬅ Back").clicked() {
                    state.go_back();
                }

                ui.colored_label(colors::GOLD, egui::RichText::new("✨ Cosmos Explorer").size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(name) = state.auth_state.first_name() {
                        ui.colored_label(colors::TEXT_SECONDARY, name);
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::main_frame())
        .show(ctx, |ui| match state.current_route() {
            Route::Landing => landing_view::render(ui, state),
            Route::Login => login_view::render(ui, state),
            Route::Register => register_view::render(ui, state),
            Route::Home => home_view::render(ui, state),
        });
}

/// Modal with the alert's title, message and a "Continue" button
pub fn render_alert(ctx: &egui::Context, state: &mut AppState) {
    let Some(alert) = state.alert.as_ref() else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new(egui::RichText::new(&alert.title).color(colors::TEXT_LIGHT).strong())
        .id(egui::Id::new("alert_modal"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(styles::modal_frame())
        .show(ctx, |ui| {
            ui.set_max_width(320.0);
            ui.add_space(8.0);
            ui.colored_label(colors::TEXT_SECONDARY, &alert.message);
            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                if ui.add_sized([200.0, 36.0], styles::primary_button("Continue")).clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed {
        state.dismiss_alert();
    }
}

/// Floating "<n> reads" badge; clicking it resets the count
pub fn render_read_counter(ctx: &egui::Context, state: &mut AppState) {
    egui::Area::new(egui::Id::new("read_counter"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-24.0, -24.0])
        .show(ctx, |ui| {
            let badge = styles::primary_button(&state.read_counter.label()).min_size(egui::vec2(96.0, 40.0));
            if ui
                .add(badge)
                .on_hover_text("Click to reset")
                .clicked()
            {
                state.reset_reads();
            }
        });
}
