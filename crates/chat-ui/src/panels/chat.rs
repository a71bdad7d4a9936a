//! Transcript panel — scrolling list of message bubbles.

use chrono::{DateTime, Local, TimeZone};
use egui::{self, Align, Layout, RichText, ScrollArea};
use chat_types::message::Message;
use crate::state::UiState;
use crate::theme::*;

pub const PLACEHOLDER_HEADING: &str = "Start the conversation";
pub const PLACEHOLDER_BODY: &str = "Try questions like \"Find 16GB RAM laptops under $1,200\" or \
    \"Compare ThinkPad X1 Carbon with Dell XPS 13.\"";

/// Render the transcript into the given height.
pub fn chat_panel(ui: &mut egui::Ui, messages: &[Message], state: &mut UiState, height: f32) {
    let scroll = state.take_scroll_request();

    egui::Frame::default()
        .fill(BG_TRANSCRIPT)
        .corner_radius(BUBBLE_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ScrollArea::vertical()
                .max_height(height)
                .min_scrolled_height(height)
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if messages.is_empty() {
                        render_placeholder(ui);
                        return;
                    }
                    for message in messages {
                        render_message(ui, message);
                        ui.add_space(6.0);
                    }
                    if scroll {
                        ui.scroll_to_cursor(Some(Align::BOTTOM));
                    }
                });
        });
}

fn render_placeholder(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.label(RichText::new(PLACEHOLDER_HEADING).color(TEXT_SECONDARY).strong());
        ui.label(RichText::new(PLACEHOLDER_BODY).color(TEXT_MUTED));
    });
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let style = bubble_style(message.role);

    ui.horizontal_top(|ui| {
        egui::Frame::default()
            .fill(style.avatar)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(RichText::new(message.role.avatar()).color(TEXT_ON_DARK).strong().small());
            });

        egui::Frame::default()
            .fill(style.fill)
            .stroke(egui::Stroke::new(1.0, BORDER))
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(message.role.label()).color(style.text).strong().small());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(format_clock(&message.timestamp.with_timezone(&Local)))
                                .color(style.text)
                                .small()
                                .weak(),
                        );
                    });
                });
                ui.label(RichText::new(&message.content).color(style.text));
            });
    });
}

/// `h:mm AM` in whatever zone the timestamp carries
pub fn format_clock<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.format("%-I:%M %p").to_string()
}
