use crate::analyze::{analyze_translations, CheckOptions};
use crate::config::{load_config, Config};
use crate::report::{display_dir, render_report};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "transcheck", version, about = "Check that every locale has the reference locale's translation keys")]
pub struct Cli {
    /// Directory holding one subdirectory per locale (default: public/locales)
    #[arg(long)]
    pub locales_dir: Option<PathBuf>,
    /// Locale whose keys every other locale must contain (default: fr)
    #[arg(long)]
    pub reference: Option<String>,
    /// Translation file name inside each locale directory (default: translation.json)
    #[arg(long)]
    pub file_name: Option<String>,
    /// Report locales in name order instead of directory listing order
    #[arg(long)]
    pub sort: bool,
    /// Config file (defaults to ./transcheck.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Flags win over config values.
    pub fn resolve(&self, cfg: Config) -> CheckOptions {
        CheckOptions {
            locales_dir: self.locales_dir.clone().unwrap_or(cfg.locales_dir),
            reference_locale: self.reference.clone().unwrap_or(cfg.reference_locale),
            file_name: self.file_name.clone().unwrap_or(cfg.file_name),
            sort_locales: self.sort || cfg.sort_locales,
        }
    }
}

pub fn handle_check(cli: Cli) -> Result<()> {
    let cfg = load_config(cli.config.as_deref())?;
    let opts = cli.resolve(cfg);

    let analysis = analyze_translations(&opts);
    info!(
        locales_with_gaps=%analysis.missing.len(),
        errors=%analysis.errors.len(),
        clean=%analysis.is_clean(),
        "Scan finished"
    );

    // Findings never change the exit status; only a failed write does.
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let shown_dir = display_dir(&opts.locales_dir);
    render_report(&mut out, &shown_dir, &opts.reference_locale, &analysis)
        .context("Writing report")?;
    out.flush().context("Writing report")?;
    Ok(())
}
