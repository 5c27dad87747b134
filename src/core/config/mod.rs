pub mod config;

pub use config::{
    CatalogConfig, QuizConfig, QuizRulesConfig, TransparencyFilter, WindowConfig, YearRange,
};
