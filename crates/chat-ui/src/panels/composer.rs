//! Composer — identity row, message input, send button and status line.

use egui::{self, Align, Layout, RichText, Vec2};
use chat_core::controller::ConversationController;
use crate::theme::*;

/// Render the composer. Returns true when the user asked to send.
///
/// The controller re-validates on submit; the disabled button is only an
/// affordance.
pub fn composer_panel(ui: &mut egui::Ui, controller: &mut ConversationController, endpoint: &str) -> bool {
    let mut send = false;
    let pending = controller.is_pending();

    egui::Frame::default()
        .fill(BG_SURFACE)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            // Identity row
            ui.horizontal(|ui| {
                ui.label(RichText::new("User ID").color(TEXT_SECONDARY).small());
                ui.add(
                    egui::TextEdit::singleline(controller.user_id_mut())
                        .desired_width(180.0),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(session_tag(controller.session_id()))
                            .color(TEXT_MUTED)
                            .small(),
                    );
                });
            });

            ui.add_space(6.0);

            // Input row
            ui.horizontal(|ui| {
                let input = egui::TextEdit::multiline(controller.input_mut())
                    .hint_text("Message Laptop Intelligence")
                    .desired_rows(2)
                    .desired_width(ui.available_width() - 110.0)
                    .font(egui::FontId::proportional(15.0));
                let response = ui.add_enabled(!pending, input);

                let enabled = controller.can_submit();
                let button = ui.add_enabled(
                    enabled,
                    egui::Button::new(
                        RichText::new(send_button_label(pending)).color(TEXT_ON_DARK).strong(),
                    )
                    .fill(if enabled { ACCENT } else { TEXT_MUTED })
                    .corner_radius(BUBBLE_ROUNDING)
                    .min_size(Vec2::new(96.0, 36.0)),
                );

                // Enter inserts a newline; Ctrl/Cmd+Enter sends
                let shortcut = response.has_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter) && i.modifiers.command);
                if button.clicked() || (shortcut && enabled) {
                    send = true;
                }
            });

            ui.add_space(6.0);

            // Meta row
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("Calling").color(TEXT_MUTED).small());
                ui.label(RichText::new(endpoint).color(TEXT_MUTED).small().monospace());
                if let Some(error) = controller.last_error() {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("Last error: {}", error))
                                .color(ERROR_AVATAR)
                                .small(),
                        );
                    });
                }
            });
        });

    send
}

pub fn send_button_label(pending: bool) -> &'static str {
    if pending {
        "Sending…"
    } else {
        "Send"
    }
}

pub fn session_tag(session_id: &str) -> String {
    format!("Session: {}", session_id)
}
