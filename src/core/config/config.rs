use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["assets/config/quiz.ron", "assets/config/quiz.local.ron"];

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            title: "Brick Colour Quiz".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct QuizRulesConfig {
    /// Answer buttons per round (keys 1..=9 address them).
    pub choices: usize,
    /// Frames the answer feedback stays up before the next round.
    pub feedback_frames: u32,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}
impl Default for QuizRulesConfig {
    fn default() -> Self {
        Self {
            choices: 4,
            // 0.9s at 60 fps
            feedback_frames: 54,
            seed: None,
        }
    }
}

/// Which transparency class the catalog keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransparencyFilter {
    #[default]
    Any,
    Opaque,
    Transparent,
}

impl TransparencyFilter {
    /// Accepts `any`, `opaque`, `trans` / `transparent` (case-insensitive).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "any" => Some(Self::Any),
            "opaque" => Some(Self::Opaque),
            "trans" | "transparent" => Some(Self::Transparent),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}
impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: 1950,
            end: 2025,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// RON catalog on disk; `None` uses the embedded catalog.
    pub path: Option<String>,
    pub exclude_non_system: bool,
    pub exclude_keywords: Vec<String>,
    /// `any` | `opaque` | `trans`; see [`TransparencyFilter::parse`].
    pub transparency: String,
    pub year_range: YearRange,
    /// Stand-in last year for colours still in production.
    pub end_of_production: i32,
}
impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            exclude_non_system: true,
            exclude_keywords: ["modulex", "duplo", "clikits", "fabuland", "ho "]
                .into_iter()
                .map(String::from)
                .collect(),
            transparency: "any".into(),
            year_range: YearRange::default(),
            end_of_production: 2025,
        }
    }
}

impl CatalogConfig {
    /// Unknown values fall back to `Any` (reported by [`QuizConfig::validate`]).
    pub fn transparency_filter(&self) -> TransparencyFilter {
        TransparencyFilter::parse(&self.transparency).unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct QuizConfig {
    pub window: WindowConfig,
    pub quiz: QuizRulesConfig,
    pub catalog: CatalogConfig,
}

impl QuizConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Deep-merges every readable file in order (later files win per key) and
    /// deserializes the result. Returns `(config, used_paths, errors)`; missing
    /// or broken layers are reported, never fatal.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (QuizConfig::default(), used, errors);
        };
        match val.into_rust::<QuizConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!("failed to deserialize merged config; using defaults: {e}"));
                (QuizConfig::default(), used, errors)
            }
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.width * self.window.height > 10_000_000.0 {
            w.push(format!(
                "very large window area: {}x{}",
                self.window.width, self.window.height
            ));
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.quiz.choices == 0 {
            w.push("quiz.choices is 0; no round can be built".into());
        } else if self.quiz.choices > 9 {
            w.push(format!(
                "quiz.choices {} exceeds the 1..9 key range; extra buttons are mouse-only",
                self.quiz.choices
            ));
        }
        if self.quiz.feedback_frames == 0 {
            w.push("quiz.feedback_frames is 0; feedback is shown for a single frame".into());
        }
        if TransparencyFilter::parse(&self.catalog.transparency).is_none() {
            w.push(format!(
                "catalog.transparency '{}' unknown (expected any|opaque|trans) -> using any",
                self.catalog.transparency
            ));
        }
        let yr = &self.catalog.year_range;
        if yr.start > yr.end {
            w.push(format!(
                "catalog.year_range start ({}) after end ({}) -> every colour filtered out",
                yr.start, yr.end
            ));
        }
        if self.catalog.exclude_non_system && self.catalog.exclude_keywords.iter().any(|k| k.trim().is_empty()) {
            w.push("catalog.exclude_keywords contains an empty keyword (ignored)".into());
        }
        w
    }
}
