//! Adaptive quiz layout: a pure function from viewport size, button count and
//! font metrics to a fresh [`LayoutGeometry`].

pub mod fonts;
pub mod geometry;

pub use fonts::{label_font_size, FontMetrics, FontSizes};
pub use geometry::{compute, Anchor, LayoutGeometry, Overflow, PixelRect, Viewport};
