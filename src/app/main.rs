/**
 * Workio Desktop App - Main Entry Point
 *
 * Implements eframe::App and drives the authentication views.
 */
use eframe::egui;
use tracing_subscriber::EnvFilter;
use workio::app::{views, AppState};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Workio",
        options,
        Box::new(|_cc| Ok(Box::new(WorkioApp::default()))),
    )
}

/// Main application state
struct WorkioApp {
    state: AppState,
}

impl Default for WorkioApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for WorkioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.process_frame();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
