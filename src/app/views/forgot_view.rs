use eframe::egui;

use crate::app::route::AppView;
use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::views::text_field;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();

    ui.vertical_centered(|ui| {
        let top_space = (available_rect.height() - 260.0).max(0.0) / 2.0;
        ui.add_space(top_space);

        ui.label(
            egui::RichText::new("Reset your password")
                .size(28.0)
                .strong()
                .color(colors::TEXT_DARK),
        );
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new("Enter your email and we will send you a reset link.")
                .color(colors::TEXT_SECONDARY),
        );
        ui.add_space(20.0);

        if state.forgot_sent {
            ui.label(
                egui::RichText::new("Check your inbox for the reset link.").color(colors::SUCCESS),
            );
            ui.add_space(10.0);
        }

        let email_error = state.forgot_errors.get("email").cloned();
        text_field(
            ui,
            available_rect.width(),
            "Email:",
            &mut state.forgot_form.email,
            false,
            email_error.as_deref(),
        );

        ui.add_space(20.0);

        let submit = ui.add_enabled(
            !state.forgot_loading(),
            egui::Button::new(egui::RichText::new("Send reset link").color(colors::TEXT_LIGHT))
                .fill(colors::ACCENT)
                .min_size(egui::vec2(280.0, 32.0)),
        );
        if submit.clicked() {
            state.handle_forgot_password();
        }

        if state.forgot_loading() {
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - 100.0).max(0.0) / 2.0);
                ui.label(egui::RichText::new("Sending...").color(colors::TEXT_SECONDARY));
                ui.spinner();
            });
        }

        ui.add_space(16.0);
        if ui.link("Back to sign in").clicked() {
            state.navigate(AppView::Login);
        }
    });
}
