use super::fonts::FontMetrics;

/// Drawable window area in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// From Bevy's logical window size (at least 1x1).
    pub fn from_logical(width: f32, height: f32) -> Self {
        Self::new(width.max(1.0) as u32, height.max(1.0) as u32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Half-open containment: left/top edges inside, right/bottom outside.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x as f32 && px < self.right() as f32 && py >= self.y as f32 && py < self.bottom() as f32
    }

    pub fn overlaps(&self, other: &PixelRect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }
}

/// Centre point of a text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    pub x: i32,
    pub y: i32,
}

/// Overflow of the button stack past the footer band, before and after the
/// single correction pass. Positive means the stack does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overflow {
    pub initial: i32,
    pub residual: i32,
}

impl Overflow {
    pub fn corrected(&self) -> bool {
        self.initial > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutGeometry {
    pub viewport: Viewport,
    pub margin: i32,
    pub title: Anchor,
    pub stat_line1: Anchor,
    pub stat_line2: Anchor,
    /// "Which colour is this?" line just above the swatch card.
    pub prompt: Anchor,
    pub swatch: PixelRect,
    /// Index `i` belongs to `Round::options[i]`.
    pub buttons: Vec<PixelRect>,
    pub button_height: i32,
    pub gap: i32,
    pub footer: Anchor,
    pub overflow: Overflow,
}

impl LayoutGeometry {
    /// Index of the answer button under a point, if any.
    pub fn button_at(&self, x: f32, y: f32) -> Option<usize> {
        self.buttons.iter().position(|r| r.contains(x, y))
    }
}

pub const MARGIN_FRAC: f64 = 0.04;
pub const SWATCH_HEIGHT_FRAC: f64 = 0.33;
pub const SWATCH_WIDTH_FRAC: f64 = 0.78;
pub const BUTTON_WIDTH_FRAC: f64 = 0.65;
pub const BUTTON_HEIGHT_MIN: i32 = 56;
pub const BUTTON_HEIGHT_MAX: i32 = 80;
pub const GAP_MIN: i32 = 16;
pub const CORRECTED_BUTTON_HEIGHT_MIN: i32 = 48;
pub const CORRECTED_GAP_MIN: i32 = 12;

// Truncates toward zero like a float->int cast on the pixel grid.
fn frac(v: i32, f: f64) -> i32 {
    (v as f64 * f) as i32
}

/// Lays out title, stats, swatch card, `choice_count` buttons and footer.
///
/// Sizes are derived top-down from viewport fractions; if the button stack
/// then overflows the footer band, one proportional shrink pass (70% height,
/// 30% gap, floors 48/12) is applied. Tiny viewports may keep a residual
/// overflow; no further passes are made.
pub fn compute(viewport: Viewport, choice_count: usize, fonts: &FontMetrics) -> LayoutGeometry {
    let w = viewport.width as i32;
    let h = viewport.height as i32;
    let n = choice_count as i32;
    let cx = w.div_euclid(2);

    let margin = frac(h, MARGIN_FRAC);
    let title_y = margin + fonts.title.div_euclid(2);
    let stat1_y = title_y + fonts.title + margin.div_euclid(2);
    let stat2_y = stat1_y + fonts.stat + frac(margin, 0.4);

    let swatch_h = frac(h, SWATCH_HEIGHT_FRAC);
    let swatch_w = ((w as f64 * SWATCH_WIDTH_FRAC).min((w - 2 * margin) as f64) as i32).max(0);
    let swatch = PixelRect::new(
        (w - swatch_w).div_euclid(2),
        stat2_y + fonts.stat + margin,
        swatch_w,
        swatch_h,
    );
    let swatch_bottom = swatch.bottom();

    let available = h - swatch_bottom - margin - fonts.footer - margin;
    let button_w = ((w as f64 * BUTTON_WIDTH_FRAC).min((w - 2 * margin) as f64) as i32).max(0);
    let mut button_h = available
        .div_euclid(n + 1)
        .clamp(BUTTON_HEIGHT_MIN, BUTTON_HEIGHT_MAX);
    let mut gap = ((available - n * button_h) / n.max(1)).max(GAP_MIN);
    let button_x = (w - button_w).div_euclid(2);
    let mut first_top = swatch_bottom + frac(gap, 0.6);

    let stack_height = |bh: i32, g: i32| n * bh + (n - 1).max(0) * g;
    let overflow_of = |top: i32, bh: i32, g: i32| top + stack_height(bh, g) + margin + fonts.footer - h;

    let initial = overflow_of(first_top, button_h, gap);
    if initial > 0 && n > 0 {
        let per_button = initial as f64 / n as f64;
        button_h = (button_h - (per_button * 0.7) as i32).max(CORRECTED_BUTTON_HEIGHT_MIN);
        gap = (gap - (per_button * 0.3) as i32).max(CORRECTED_GAP_MIN);
        first_top = swatch_bottom + frac(gap, 0.6);
    }
    let residual = overflow_of(first_top, button_h, gap);

    let buttons = (0..n)
        .map(|i| PixelRect::new(button_x, first_top + i * (button_h + gap), button_w, button_h))
        .collect();

    LayoutGeometry {
        viewport,
        margin,
        title: Anchor { x: cx, y: title_y },
        stat_line1: Anchor { x: cx, y: stat1_y },
        stat_line2: Anchor { x: cx, y: stat2_y },
        prompt: Anchor {
            x: cx,
            y: swatch.y - frac(fonts.stat, 0.8),
        },
        swatch,
        buttons,
        button_height: button_h,
        gap,
        footer: Anchor { x: cx, y: h - margin },
        overflow: Overflow { initial, residual },
    }
}
