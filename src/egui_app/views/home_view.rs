use eframe::egui;

use crate::egui_app::counter::ReadCounter;
use crate::egui_app::home::{toggle_caption, HomeScreen};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

const GALAXY_CARD_WIDTH: f32 = 280.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut logout = false;

    if let Some(home) = state.home.as_mut() {
        logout = render_header(ui, home.first_name());
        ui.add_space(16.0);

        if home.is_loading() {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.add(egui::Spinner::new().size(48.0).color(colors::GOLD));
            });
        } else {
            egui::ScrollArea::vertical().show(ui, |ui| {
                render_apod(ui, home, &mut state.read_counter);
                ui.add_space(24.0);
                render_galaxies(ui, home, &mut state.read_counter);
                // Room for the floating counter
                ui.add_space(80.0);
            });
        }
    }

    if logout {
        state.logout();
    }
}

/// Greeting and logout button; returns true when logout was clicked
fn render_header(ui: &mut egui::Ui, first_name: &str) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.colored_label(colors::TEXT_SECONDARY, egui::RichText::new("Welcome back,").size(16.0));
            let name = if first_name.is_empty() { "User" } else { first_name };
            ui.colored_label(colors::GOLD, egui::RichText::new(name).size(28.0).strong());
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let button = egui::Button::new(egui::RichText::new("Logout").color(colors::ERROR))
                .stroke(egui::Stroke::new(1.0, colors::ERROR));
            clicked = ui.add(button).clicked();
        });
    });
    clicked
}

fn render_apod(ui: &mut egui::Ui, home: &mut HomeScreen, counter: &mut ReadCounter) {
    ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("Today's Cosmic Wonder").size(22.0).strong());
    ui.add_space(8.0);

    let Some(feed) = home.feed() else {
        return;
    };
    let apod = feed.apod.clone();
    let text = home.description_text().unwrap_or_default();
    let expanded = home.is_description_expanded();

    let mut toggled = false;
    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.hyperlink_to(egui::RichText::new("🖼 View image").color(colors::GOLD), &apod.url);
        ui.add_space(6.0);
        ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new(&apod.title).size(20.0).strong());
        ui.colored_label(colors::GOLD, &apod.date);
        if let Some(copyright) = apod.copyright.as_deref() {
            ui.colored_label(colors::TEXT_SECONDARY, format!("© {}", copyright.trim()));
        }
        ui.add_space(8.0);
        ui.add(egui::Label::new(egui::RichText::new(text).color(colors::TEXT_BODY)).wrap());
        ui.add_space(8.0);
        toggled = ui.add(styles::outline_button(toggle_caption(expanded))).clicked();
    });

    if toggled {
        home.toggle_description(counter);
    }
}

fn render_galaxies(ui: &mut egui::Ui, home: &mut HomeScreen, counter: &mut ReadCounter) {
    ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("Discover Galaxies").size(22.0).strong());
    ui.add_space(8.0);

    let mut toggled = None;
    ui.horizontal_wrapped(|ui| {
        for (index, card) in home.galaxies().iter().enumerate() {
            let expanded = home.is_galaxy_expanded(index);
            let text = home.galaxy_text(index).unwrap_or_default();

            styles::card_frame().show(ui, |ui| {
                ui.set_width(GALAXY_CARD_WIDTH);
                ui.vertical(|ui| {
                    ui.hyperlink_to(egui::RichText::new("🖼 View image").color(colors::GOLD), &card.image_url);
                    ui.add_space(4.0);
                    ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new(&card.title).strong());
                    ui.colored_label(colors::GOLD, card.display_date());
                    ui.add_space(4.0);
                    ui.add(egui::Label::new(egui::RichText::new(text).color(colors::TEXT_BODY)).wrap());
                    ui.add_space(6.0);
                    if ui.add(styles::outline_button(toggle_caption(expanded))).clicked() {
                        toggled = Some(index);
                    }
                });
            });
        }
    });

    if let Some(index) = toggled {
        home.toggle_galaxy(index, counter);
    }
}
