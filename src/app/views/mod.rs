use eframe::egui;

use crate::app::route::AppView;
use crate::app::state::{AppState, NoticeKind};
use crate::app::theme::colors;

pub mod forgot_view;
pub mod home_view;
pub mod login_view;
pub mod register_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("Workio").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);

                    if let Some(notice) = &state.notice {
                        let color = match notice.kind {
                            NoticeKind::Success => colors::SUCCESS,
                            NoticeKind::Error => colors::ERROR,
                        };
                        ui.colored_label(color, &notice.message);
                        ui.add_space(16.0);
                    }

                    if let Some(user) = &state.current_user {
                        ui.colored_label(colors::TEXT_LIGHT, &user.full_name);
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_LIGHT)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_view {
            AppView::Home => home_view::render(ui, state),
            AppView::Login => login_view::render(ui, state),
            AppView::Register => register_view::render(ui, state),
            AppView::ForgotPassword => forgot_view::render(ui, state),
        });
}

/// A labeled single-line input with an inline validation error below it
pub(crate) fn text_field(
    ui: &mut egui::Ui,
    available_width: f32,
    label: &str,
    value: &mut String,
    password: bool,
    error: Option<&str>,
) {
    let input_width = 280.0;
    let label_width = 110.0;

    ui.horizontal(|ui| {
        ui.add_space((available_width - input_width - label_width - 20.0).max(0.0) / 2.0);
        ui.add_sized(
            [label_width, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
        );
        ui.add_sized(
            [input_width, 28.0],
            egui::TextEdit::singleline(value)
                .password(password)
                .text_color(colors::TEXT_DARK),
        );
    });
    if let Some(error) = error {
        ui.label(egui::RichText::new(error).color(colors::ERROR).size(12.0));
    }
    ui.add_space(8.0);
}
