use std::io::stdout;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::Parser;

use delve_loca::{langs_in_dir, validate_dir, Lang, OutputStyle, Reports, Severity};

#[derive(Parser)]
#[clap(version)]
struct Cli {
    /// Path to the catalog directory to check.
    langdir: PathBuf,
    /// Language to check. May be repeated. Defaults to every language
    /// found in the catalog directory.
    #[clap(long = "lang")]
    langs: Vec<String>,
    /// Show advice in addition to warnings and errors
    #[clap(long)]
    advice: bool,
    /// Output the reports in JSON format
    #[clap(long)]
    json: bool,
    /// Omit color from the output. False by default.
    #[clap(long)]
    no_color: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if !cli.langdir.is_dir() {
        bail!("{} is not a directory", cli.langdir.display());
    }

    let langs = if cli.langs.is_empty() {
        langs_in_dir(&cli.langdir)
    } else {
        cli.langs.iter().map(|tag| Lang::new(tag)).collect::<Result<Vec<_>, _>>()?
    };
    if langs.is_empty() {
        bail!("no catalogs found under {}", cli.langdir.display());
    }

    let mut reports = Reports::new();
    if !cli.advice {
        reports.minimum_severity(Severity::Warning);
    }

    validate_dir(&cli.langdir, &langs, &mut reports)?;

    let worst = reports.worst();
    if cli.json {
        reports.emit_json(&mut stdout())?;
        println!();
    } else {
        let styles = if cli.no_color { OutputStyle::no_color() } else { OutputStyle::default() };
        reports.emit(&styles);
    }

    if worst >= Some(Severity::Warning) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
