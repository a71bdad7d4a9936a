//! UI theme constants (light palette)

use egui::{Color32, CornerRadius, Stroke, Vec2};
use chat_types::message::Role;

pub const BG_PAGE: Color32 = Color32::from_rgb(241, 245, 249);
pub const BG_SURFACE: Color32 = Color32::from_rgb(255, 255, 255);
pub const BG_TRANSCRIPT: Color32 = Color32::from_rgb(248, 250, 252);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(15, 23, 42);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(71, 85, 105);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(148, 163, 184);
pub const TEXT_ON_DARK: Color32 = Color32::from_rgb(248, 250, 252);
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const BORDER: Color32 = Color32::from_rgb(203, 213, 225);

pub const USER_BUBBLE: Color32 = Color32::from_rgb(15, 23, 42);
pub const USER_AVATAR: Color32 = Color32::from_rgb(31, 41, 55);
pub const ASSISTANT_BUBBLE: Color32 = Color32::from_rgb(248, 250, 252);
pub const ERROR_BUBBLE: Color32 = Color32::from_rgb(254, 226, 226);
pub const ERROR_TEXT: Color32 = Color32::from_rgb(153, 27, 27);
pub const ERROR_AVATAR: Color32 = Color32::from_rgb(185, 28, 28);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(12);
pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(18);
pub const PANEL_PADDING: Vec2 = Vec2::new(18.0, 12.0);

/// Colors for one transcript entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleStyle {
    pub fill: Color32,
    pub text: Color32,
    pub avatar: Color32,
}

pub fn bubble_style(role: Role) -> BubbleStyle {
    match role {
        Role::User => BubbleStyle {
            fill: USER_BUBBLE,
            text: TEXT_ON_DARK,
            avatar: USER_AVATAR,
        },
        Role::Assistant => BubbleStyle {
            fill: ASSISTANT_BUBBLE,
            text: TEXT_PRIMARY,
            avatar: ACCENT,
        },
        Role::System | Role::Error => BubbleStyle {
            fill: ERROR_BUBBLE,
            text: ERROR_TEXT,
            avatar: ERROR_AVATAR,
        },
    }
}

/// Apply the light theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = BG_PAGE;
    style.visuals.window_fill = BG_SURFACE;
    style.visuals.extreme_bg_color = BG_SURFACE;

    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER);
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_ON_DARK);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.25);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(10.0, 8.0);

    ctx.set_style(style);
}
