//! Header — title, subtitle and the reset button.

use egui::{self, Align, Layout, RichText};
use crate::theme::*;

pub const TITLE: &str = "Laptop Intelligence";
pub const SUBTITLE: &str = "Ask anything about specs, pricing, or availability and we'll answer \
    using your marketplace data.";

/// Render the header. Returns true when "Reset chat" was clicked.
pub fn header_panel(ui: &mut egui::Ui, status_text: &str) -> bool {
    let mut reset = false;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(RichText::new(TITLE).color(TEXT_PRIMARY).strong().size(24.0));
            ui.label(RichText::new(SUBTITLE).color(TEXT_SECONDARY));
        });
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let button = egui::Button::new(RichText::new("Reset chat").color(TEXT_PRIMARY).strong())
                .fill(BG_SURFACE)
                .corner_radius(PANEL_ROUNDING);
            if ui.add(button).clicked() {
                reset = true;
            }
            ui.label(RichText::new(status_text).color(TEXT_MUTED).small());
        });
    });

    reset
}
