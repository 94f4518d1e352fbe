use eframe::egui;

use crate::app::route::AppView;
use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::views::text_field;
use crate::shared::auth::AuthRole;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();

    ui.vertical_centered(|ui| {
        let top_space = (available_rect.height() - 360.0).max(0.0) / 2.0;
        ui.add_space(top_space);

        ui.label(
            egui::RichText::new("Sign in to Workio")
                .size(28.0)
                .strong()
                .color(colors::TEXT_DARK),
        );
        ui.add_space(4.0);
        ui.label(egui::RichText::new("Welcome back!").color(colors::TEXT_SECONDARY));
        ui.add_space(20.0);

        if let Some(error) = state.login_vm.error() {
            ui.label(egui::RichText::new(error).color(colors::ERROR));
            ui.add_space(10.0);
        }

        let email_error = state.login_errors.get("email").cloned();
        let password_error = state.login_errors.get("password").cloned();

        text_field(
            ui,
            available_rect.width(),
            "Email:",
            &mut state.login_form.email,
            false,
            email_error.as_deref(),
        );
        text_field(
            ui,
            available_rect.width(),
            "Password:",
            &mut state.login_form.password,
            true,
            password_error.as_deref(),
        );

        // Role selector: picks which backend endpoint the login goes to
        ui.horizontal(|ui| {
            ui.add_space((available_rect.width() - 410.0).max(0.0) / 2.0);
            ui.add_sized(
                [110.0, 24.0],
                egui::Label::new(egui::RichText::new("Sign in as:").color(colors::TEXT_SECONDARY)),
            );
            for role in AuthRole::ALL {
                ui.selectable_value(&mut state.login_form.role, role, role.label());
            }
        });
        ui.add_space(20.0);

        let submit = ui.add_enabled(
            !state.login_vm.is_loading(),
            egui::Button::new(egui::RichText::new("Sign In").color(colors::TEXT_LIGHT))
                .fill(colors::ACCENT)
                .min_size(egui::vec2(280.0, 32.0)),
        );
        if submit.clicked() {
            state.handle_login();
        }

        if state.login_vm.is_loading() {
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.add_space((available_rect.width() - 100.0).max(0.0) / 2.0);
                ui.label(egui::RichText::new("Signing in...").color(colors::TEXT_SECONDARY));
                ui.spinner();
            });
        }

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            ui.add_space((available_rect.width() - 320.0).max(0.0) / 2.0);
            if ui.link("Forgot password?").clicked() {
                state.navigate(AppView::ForgotPassword);
            }
            ui.add_space(40.0);
            if ui.link("Create an account").clicked() {
                state.navigate(AppView::Register);
            }
        });
    });
}
