/**
 * egui Native Desktop App - Main Entry Point
 *
 * Initializes tracing and configuration, opens local storage and hands the
 * resulting state to eframe.
 */
use eframe::egui;
use tracing_subscriber::EnvFilter;

use cosmos_explorer::egui_app::theme::styles;
use cosmos_explorer::egui_app::types::Route;
use cosmos_explorer::egui_app::{views, AppState, Config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .init();

    let config = Config::load()?;
    tracing::info!(
        apod_url = %config.app().apod_url,
        images_url = %config.app().images_url,
        "Configuration loaded"
    );

    let state = AppState::bootstrap(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([480.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Cosmos Explorer",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(CosmosApp { state }))
        }),
    )?;
    Ok(())
}

/// Main application state
struct CosmosApp {
    state: AppState,
}

impl eframe::App for CosmosApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_pending();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        if self.state.current_route() == Route::Home {
            views::render_read_counter(ctx, &mut self.state);
        }
        views::render_alert(ctx, &mut self.state);

        if self.state.is_busy() {
            ctx.request_repaint();
        }
    }
}
