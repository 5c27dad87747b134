use bevy::prelude::*;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::srgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

pub const BACKGROUND: Color = rgb(16, 16, 20);
pub const CARD: Color = rgb(30, 32, 38);
pub const CARD_EDGE: Color = rgb(60, 64, 72);
pub const TEXT: Color = rgb(235, 238, 245);
pub const TEXT_DIM: Color = rgb(180, 190, 205);
pub const OK: Color = rgb(64, 190, 120);
pub const BAD: Color = rgb(230, 85, 95);
pub const BUTTON: Color = rgb(35, 38, 45);
pub const BUTTON_HOVER: Color = rgb(40, 44, 52);
// Shown if a round ever carries a malformed hex.
pub const SWATCH_FALLBACK: Color = Color::srgb(1.0, 0.0, 1.0);

pub const CARD_RADIUS: f32 = 16.0;
pub const SWATCH_RADIUS: f32 = 12.0;
pub const BUTTON_RADIUS: f32 = 14.0;
/// Inset of the colour fill inside the swatch card (per side).
pub const SWATCH_INSET: f32 = 12.0;
pub const CARD_BORDER: f32 = 3.0;
pub const BUTTON_BORDER: f32 = 2.0;
pub const FEEDBACK_BORDER: f32 = 5.0;

#[inline]
pub fn swatch_color(hex: &str) -> Color {
    Srgba::hex(hex).map(Color::from).unwrap_or(SWATCH_FALLBACK)
}
