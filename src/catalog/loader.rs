//! Catalog provider: RON records -> filtered, deduplicated [`Dataset`].
//!
//! Disk catalogs are read at startup; when no path is configured the catalog
//! compiled into the binary is used instead (no runtime FS IO, also what wasm
//! builds would rely on).

use bevy::prelude::*; // For logging macros only
use serde::Deserialize;
use std::collections::HashSet;
use std::{fs, path::Path};

use super::{CatalogError, ColorEntry, Dataset};
use crate::core::config::{CatalogConfig, TransparencyFilter};

pub const EMBEDDED_CATALOG_RON: &str = include_str!("../../assets/catalog/colours.ron");

/// Raw catalog row as authored (mirrors the upstream colour table columns).
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogRecord {
    pub name: String,
    pub rgb: String,
    #[serde(default)]
    pub is_trans: bool,
    /// First production year.
    pub y1: i32,
    /// Last production year; `None` while still in production.
    #[serde(default)]
    pub y2: Option<i32>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogFile {
    #[serde(default)]
    pub colours: Vec<CatalogRecord>,
}

/// Per-stage drop counts, logged once per load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub total: usize,
    pub keyword: usize,
    pub transparency: usize,
    pub years: usize,
    pub duplicates: usize,
    pub kept: usize,
}

impl CatalogFile {
    pub fn from_ron_str(text: &str, origin: &str) -> Result<Self, CatalogError> {
        ron::from_str(text).map_err(|e| CatalogError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let txt = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron_str(&txt, &path.display().to_string())
    }

    /// Applies the filter policy in order: keywords, transparency, year range,
    /// then first-wins name deduplication. Surviving hex strings are converted.
    pub fn filter(&self, cfg: &CatalogConfig) -> Result<(Vec<ColorEntry>, FilterReport), CatalogError> {
        let mut report = FilterReport {
            total: self.colours.len(),
            ..Default::default()
        };
        let keywords: Vec<String> = cfg
            .exclude_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        let (start, end) = (cfg.year_range.start, cfg.year_range.end);
        let transparency = cfg.transparency_filter();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut out = Vec::with_capacity(self.colours.len());

        for rec in &self.colours {
            if cfg.exclude_non_system {
                let lower = rec.name.to_lowercase();
                if keywords.iter().any(|k| lower.contains(k.as_str())) {
                    report.keyword += 1;
                    continue;
                }
            }
            let class_ok = match transparency {
                TransparencyFilter::Any => true,
                TransparencyFilter::Opaque => !rec.is_trans,
                TransparencyFilter::Transparent => rec.is_trans,
            };
            if !class_ok {
                report.transparency += 1;
                continue;
            }
            let last_year = rec.y2.unwrap_or(cfg.end_of_production);
            if !(rec.y1 <= end && last_year >= start) {
                report.years += 1;
                continue;
            }
            if !seen.insert(rec.name.as_str()) {
                report.duplicates += 1;
                continue;
            }
            out.push(ColorEntry::from_hex(rec.name.clone(), &rec.rgb, rec.is_trans)?);
        }
        report.kept = out.len();
        Ok((out, report))
    }

    pub fn into_dataset(self, cfg: &CatalogConfig, origin: &str) -> Result<Dataset, CatalogError> {
        let (entries, report) = self.filter(cfg)?;
        info!(
            target: "catalog",
            "Catalog {origin}: kept {} of {} (keyword={} transparency={} years={} duplicates={})",
            report.kept,
            report.total,
            report.keyword,
            report.transparency,
            report.years,
            report.duplicates
        );
        if entries.is_empty() {
            return Err(CatalogError::Empty {
                origin: origin.to_string(),
            });
        }
        Dataset::new(entries)
    }
}

/// Loads the catalog named by `cfg.path`, or the embedded one when unset.
pub fn load_catalog(cfg: &CatalogConfig) -> Result<Dataset, CatalogError> {
    match cfg.path.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => {
            let file = CatalogFile::load_from_file(path)?;
            file.into_dataset(cfg, path)
        }
        None => load_embedded_catalog(cfg),
    }
}

pub fn load_embedded_catalog(cfg: &CatalogConfig) -> Result<Dataset, CatalogError> {
    let file = CatalogFile::from_ron_str(EMBEDDED_CATALOG_RON, "<embedded>")?;
    file.into_dataset(cfg, "<embedded>")
}
