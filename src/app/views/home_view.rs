use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();

    ui.vertical_centered(|ui| {
        let top_space = (available_rect.height() - 160.0).max(0.0) / 2.0;
        ui.add_space(top_space);

        let greeting = match &state.current_user {
            Some(user) => format!("Welcome, {}!", user.full_name),
            None => "Welcome back!".to_string(),
        };
        ui.label(
            egui::RichText::new(greeting)
                .size(28.0)
                .strong()
                .color(colors::TEXT_DARK),
        );
        ui.add_space(8.0);

        if let Some(role) = state.session.role() {
            ui.label(
                egui::RichText::new(format!("Signed in as {}", role))
                    .color(colors::TEXT_SECONDARY),
            );
        }

        if let Some(user) = &state.current_user {
            ui.add_space(4.0);
            ui.label(egui::RichText::new(&user.email).color(colors::TEXT_SECONDARY));
        }
    });
}
