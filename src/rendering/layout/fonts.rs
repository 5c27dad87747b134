/// Bevy's default relative line height (`LineHeight::RelativeToFont(1.2)`).
pub const LINE_HEIGHT: f32 = 1.2;
/// Rough average glyph advance as a fraction of font size, for fit checks.
pub const AVG_GLYPH_ADVANCE: f32 = 0.5;
/// Horizontal label padding inside a button, both sides combined.
pub const LABEL_PADDING: i32 = 40;

/// Font sizes for the four text roles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    pub title: f32,
    pub stat: f32,
    pub label: f32,
    pub footer: f32,
}

impl FontSizes {
    pub fn from_scale(scale: f32) -> Self {
        let size = |base: f32, min: i32| ((base * scale) as i32).max(min) as f32;
        Self {
            title: size(48.0, 28),
            stat: size(32.0, 20),
            label: size(26.0, 18),
            footer: size(20.0, 14),
        }
    }

    /// Scales with window height around 800px, clamped to 0.8..=1.2.
    pub fn for_viewport_height(height: u32) -> Self {
        Self::from_scale((height as f32 / 800.0).clamp(0.8, 1.2))
    }

    pub fn metrics(&self) -> FontMetrics {
        let line = |size: f32| (size * LINE_HEIGHT).round() as i32;
        FontMetrics {
            title: line(self.title),
            stat: line(self.stat),
            label: line(self.label),
            footer: line(self.footer),
        }
    }
}

impl Default for FontSizes {
    fn default() -> Self {
        Self::from_scale(1.0)
    }
}

/// Line heights in pixels for the four text roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub title: i32,
    pub stat: i32,
    pub label: i32,
    pub footer: i32,
}

impl Default for FontMetrics {
    fn default() -> Self {
        FontSizes::default().metrics()
    }
}

/// Label size for a button: one step (4px, floor 16) smaller when the
/// estimated text width does not fit inside the padded button.
pub fn label_font_size(label: &str, button_width: i32, base: f32) -> f32 {
    let estimated = label.chars().count() as f32 * base * AVG_GLYPH_ADVANCE;
    if estimated > (button_width - LABEL_PADDING) as f32 {
        (base - 4.0).max(16.0)
    } else {
        base
    }
}
