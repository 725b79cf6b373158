//! Compare every locale's key set against the reference locale.

use crate::diff::{collect_keys, missing_keys};
use crate::errors::LoadError;
use crate::json_utils::read_translation_file;
use indexmap::IndexMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Locale name to its sorted missing keys, in scan order.
pub type DiffResult = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub locales_dir: PathBuf,
    pub reference_locale: String,
    pub file_name: String,
    pub sort_locales: bool,
}

#[derive(Debug, Default)]
pub struct Analysis {
    pub missing: DiffResult,
    pub errors: Vec<LoadError>,
}

impl Analysis {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.errors.is_empty()
    }
}

pub fn analyze_translations(opts: &CheckOptions) -> Analysis {
    let mut analysis = Analysis::default();

    let reference_path = opts.locales_dir.join(&opts.reference_locale).join(&opts.file_name);
    let reference = match read_translation_file(&reference_path) {
        Ok(v) => v,
        Err(err) => {
            warn!(file=?err.path(), "Reference locale could not be loaded");
            analysis.errors.push(err);
            return analysis;
        }
    };
    let reference_keys = collect_keys(&reference);
    info!(locale=%opts.reference_locale, keys=%reference_keys.len(), "Loaded reference locale");

    let entries = match fs::read_dir(&opts.locales_dir) {
        Ok(rd) => rd,
        Err(source) => {
            analysis.errors.push(LoadError::Read { path: opts.locales_dir.clone(), source });
            return analysis;
        }
    };
    let mut candidates: Vec<(String, PathBuf)> = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(source) => {
                analysis.errors.push(LoadError::Read { path: opts.locales_dir.clone(), source });
                continue;
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == opts.reference_locale {
            continue;
        }
        candidates.push((name, entry.path()));
    }
    if opts.sort_locales {
        candidates.sort_by(|a, b| a.0.cmp(&b.0));
    }

    for (locale, dir) in candidates {
        if !dir.is_dir() {
            continue;
        }
        let path = dir.join(&opts.file_name);
        if !path.exists() {
            debug!(locale=%locale, "No translation file, skipping");
            continue;
        }
        let doc = match read_translation_file(&path) {
            Ok(v) => v,
            Err(err) => {
                warn!(locale=%locale, file=?err.path(), "Translation file could not be loaded");
                analysis.errors.push(err);
                continue;
            }
        };
        let missing = missing_keys(&reference_keys, &collect_keys(&doc));
        debug!(locale=%locale, missing=%missing.len(), "Compared locale");
        if !missing.is_empty() {
            analysis.missing.insert(locale, missing);
        }
    }

    analysis
}
