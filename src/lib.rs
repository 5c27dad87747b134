pub mod app;
pub mod catalog;
pub mod core;
pub mod gameplay;
pub mod interaction;
pub mod rendering;

// Curated re-exports
pub use app::game::QuizPlugin;
pub use catalog::{load_catalog, CatalogError, ColorEntry, Dataset};
pub use core::config::{QuizConfig, WindowConfig};
pub use gameplay::{QuizError, QuizSession, Round, RoundGenerator, ScoreTracker, SessionStats};
pub use rendering::layout::{LayoutGeometry, Viewport};
