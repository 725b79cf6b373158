use crate::analyze::Analysis;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Absolute form of the locales directory for the header, or the path as given
/// when it cannot be resolved.
pub fn display_dir(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Write the human-readable report for a finished scan.
pub fn render_report<W: Write>(
    w: &mut W,
    locales_dir: &Path,
    reference_locale: &str,
    analysis: &Analysis,
) -> io::Result<()> {
    writeln!(w, "🔍 Analyzing translation files...")?;
    writeln!(w, "📁 Locales directory: {}\n", locales_dir.display())?;

    if !analysis.errors.is_empty() {
        writeln!(w, "⚠️  Errors found while analyzing files:")?;
        for err in analysis.errors.iter() {
            writeln!(w, "  ❌ {}", err)?;
        }
        writeln!(w)?;
    }

    if analysis.missing.is_empty() {
        writeln!(
            w,
            "✅ All languages have the same keys as {}!",
            reference_locale.to_uppercase()
        )?;
    } else {
        writeln!(w, "⚠️  Missing keys found:\n")?;
        for (locale, keys) in analysis.missing.iter() {
            writeln!(w, "🌐 {}:", locale.to_uppercase())?;
            for key in keys {
                writeln!(w, "  ❌ {}", key)?;
            }
            writeln!(w)?;
        }
    }
    Ok(())
}
