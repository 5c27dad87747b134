//! Colour catalog: the dataset contract consumed by the quiz core plus the
//! provider that builds it from RON records.
//!
//! The quiz core never filters or mutates a [`Dataset`]; all filtering policy
//! (keywords, transparency, production years, deduplication) lives in
//! [`loader`].

pub mod loader;

use std::collections::HashSet;
use std::fmt;

pub use loader::{load_catalog, load_embedded_catalog, CatalogFile, CatalogRecord};

/// One catalog colour with precomputed HSV.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    pub name: String,
    /// Six hex digits, no leading `#`.
    pub rgb_hex: String,
    pub is_transparent: bool,
    /// Degrees in `[0, 360)`.
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl ColorEntry {
    /// Builds an entry from a hex string, deriving HSV. Accepts an optional leading `#`.
    pub fn from_hex(
        name: impl Into<String>,
        hex: &str,
        is_transparent: bool,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        let digits = normalize_hex(hex).ok_or_else(|| CatalogError::InvalidHex {
            name: name.clone(),
            hex: hex.to_string(),
        })?;
        let srgba = bevy::color::Srgba::hex(&digits).map_err(|_| CatalogError::InvalidHex {
            name: name.clone(),
            hex: hex.to_string(),
        })?;
        let hsva = bevy::color::Hsva::from(srgba);
        Ok(Self {
            name,
            rgb_hex: digits,
            is_transparent,
            hue: if hsva.hue >= 360.0 { 0.0 } else { hsva.hue },
            saturation: hsva.saturation,
            value: hsva.value,
        })
    }
}

fn normalize_hex(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(digits.to_ascii_uppercase())
    } else {
        None
    }
}

/// Ordered, name-unique collection of colour entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    entries: Vec<ColorEntry>,
}

impl Dataset {
    /// Wraps already-filtered entries. Fails on the first repeated name.
    pub fn new(entries: Vec<ColorEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for e in &entries {
            if !seen.insert(e.name.as_str()) {
                return Err(CatalogError::DuplicateName(e.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ColorEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorEntry> {
        self.entries.iter()
    }

    pub fn find(&self, name: &str) -> Option<&ColorEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Number of entries in each transparency class as `(opaque, transparent)`.
    pub fn class_counts(&self) -> (usize, usize) {
        let transparent = self.entries.iter().filter(|e| e.is_transparent).count();
        (self.entries.len() - transparent, transparent)
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Read { path: String, source: std::io::Error },
    Parse { origin: String, message: String },
    InvalidHex { name: String, hex: String },
    DuplicateName(String),
    /// Every record was removed by the filter policy.
    Empty { origin: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => write!(f, "read catalog {path}: {source}"),
            Self::Parse { origin, message } => write!(f, "parse catalog {origin}: {message}"),
            Self::InvalidHex { name, hex } => {
                write!(f, "colour '{name}' has invalid hex '{hex}' (expected RRGGBB)")
            }
            Self::DuplicateName(name) => write!(f, "duplicate colour name '{name}'"),
            Self::Empty { origin } => write!(f, "catalog {origin} has no colours left after filtering"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}
