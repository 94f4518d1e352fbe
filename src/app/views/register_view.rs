use eframe::egui;

use crate::app::route::AppView;
use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::views::text_field;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();

    ui.vertical_centered(|ui| {
        let top_space = (available_rect.height() - 420.0).max(0.0) / 2.0;
        ui.add_space(top_space);

        ui.label(
            egui::RichText::new("Create your account")
                .size(28.0)
                .strong()
                .color(colors::TEXT_DARK),
        );
        ui.add_space(20.0);

        let full_name_error = state.register_errors.get("full_name").cloned();
        let email_error = state.register_errors.get("email").cloned();
        let password_error = state.register_errors.get("password").cloned();
        let confirm_error = state.register_errors.get("confirm_password").cloned();

        text_field(
            ui,
            available_rect.width(),
            "Full name:",
            &mut state.register_form.full_name,
            false,
            full_name_error.as_deref(),
        );
        text_field(
            ui,
            available_rect.width(),
            "Email:",
            &mut state.register_form.email,
            false,
            email_error.as_deref(),
        );
        text_field(
            ui,
            available_rect.width(),
            "Password:",
            &mut state.register_form.password,
            true,
            password_error.as_deref(),
        );
        text_field(
            ui,
            available_rect.width(),
            "Confirm:",
            &mut state.register_form.confirm_password,
            true,
            confirm_error.as_deref(),
        );

        ui.add_space(20.0);

        let submit = ui.add_enabled(
            !state.register_loading(),
            egui::Button::new(egui::RichText::new("Sign Up").color(colors::TEXT_LIGHT))
                .fill(colors::ACCENT)
                .min_size(egui::vec2(280.0, 32.0)),
        );
        if submit.clicked() {
            state.handle_register();
        }

        if state.register_loading() {
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - 100.0).max(0.0) / 2.0);
                ui.label(egui::RichText::new("Creating...").color(colors::TEXT_SECONDARY));
                ui.spinner();
            });
        }

        ui.add_space(16.0);
        if ui.link("Back to sign in").clicked() {
            state.navigate(AppView::Login);
        }
    });
}
