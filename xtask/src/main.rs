// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! Developer commands for the workspace (`cargo xtask <command>`). Besides
//! the CI pipeline, `validate-data` checks that the stored Kurdish dates in
//! the holiday collections agree with the converter.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, path::PathBuf, process::Output, vec};

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    eyre::{bail, eyre, Context},
    Result,
};
use duct::cmd;
use roj_store::{FileHolidayStore, IntegrityReport, IssueKind, SourceKey};
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, unused dependencies, build, test, data validation)
    CI,

    /// Build the workspace
    #[command(visible_alias = "b")]
    Build,

    /// Check for unused dependencies
    #[command(visible_alias = "m")]
    Machete,

    /// Lint formatting and clippy
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the workspace
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check for formatting issues
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Fix formatting issues
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run all tests, doc tests included
    #[command(visible_alias = "t")]
    Test,

    /// Check stored Kurdish dates in the holiday data, optionally fixing them
    #[command(visible_alias = "vd")]
    ValidateData(ValidateDataArgs),
}

const DEFAULT_DATA_DIR: &str = "data/years";

#[derive(Clone, Debug, clap::Args)]
struct ValidateDataArgs {
    /// Collection to check, e.g. `2025` or `historical`. Checks all when omitted
    #[arg(short, long)]
    file: Option<String>,

    /// Rewrite stored Kurdish dates that disagree with the converter
    #[arg(short, long)]
    update: bool,

    /// With --update, report what would change without writing
    #[arg(long, requires = "update")]
    dry_run: bool,

    /// Directory holding the collection files
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
}

impl Default for ValidateDataArgs {
    fn default() -> Self {
        Self {
            file: None,
            update: false,
            dry_run: false,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Machete => machete(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintFormatting => lint_format(),
            Self::FixFormatting => fix_format(),
            Self::Test => test(),
            Self::ValidateData(args) => validate_data(&args),
        }
    }
}

fn ci() -> Result<()> {
    lint()?;
    machete()?;
    build()?;
    test()?;
    validate_data(&ValidateDataArgs::default())
}

fn machete() -> Result<()> {
    cmd!("cargo-machete").run_with_trace()?;
    Ok(())
}

fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

fn lint() -> Result<()> {
    lint_clippy()?;
    lint_format()
}

fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

fn lint_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all", "--check"])
}

fn fix_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all"])
}

/// Unit and integration tests first, then doc tests
fn test() -> Result<()> {
    run_cargo(vec!["test", "--all-targets", "--all-features"])?;
    run_cargo(vec!["test", "--doc", "--all-features"])
}

fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Rustfmt options in this workspace need the nightly toolchain.
fn run_cargo_nightly(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args)
        // set by cargo when running xtask, and would pin the stable toolchain
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Maps a `--file` value such as `2025`, `2025.json` or `historical` to its
/// collection.
fn collection_key(name: &str) -> Result<SourceKey> {
    let stem: &str = name.strip_suffix(".json").unwrap_or(name);
    SourceKey::from_name(stem).ok_or_else(|| eyre!("'{name}' is not a year or 'historical'"))
}

/// Check the selected collections and optionally rewrite their Kurdish dates.
///
/// Fails when any record still needs attention afterwards: records that do
/// not load at all, and Kurdish dates that are missing or wrong unless
/// `--update` wrote the fix.
fn validate_data(args: &ValidateDataArgs) -> Result<()> {
    let store = FileHolidayStore::new(args.data_dir.clone());
    let keys: Vec<SourceKey> = match &args.file {
        Some(name) => vec![collection_key(name)?],
        None => store
            .list_keys()
            .wrap_err_with(|| format!("failed to list {}", args.data_dir.display()))?,
    };

    let fixes_written: bool = args.update && !args.dry_run;
    let mut outstanding: usize = 0;
    for key in keys {
        let path: PathBuf = store.path_for(key);
        let report: IntegrityReport = store
            .check(key)
            .wrap_err_with(|| format!("failed to check {}", path.display()))?;

        if report.is_clean() {
            tracing::info!("{}: {} records OK", path.display(), report.records);
            continue;
        }
        for issue in &report.issues {
            tracing::warn!("{}: {issue}", path.display());
        }

        if args.update {
            let changed: usize = store.update_kurdish_dates(key, args.dry_run)?;
            let verb: &str = if args.dry_run {
                "would update"
            } else {
                "updated"
            };
            tracing::info!("{}: {verb} {changed} Kurdish dates", path.display());
        }
        outstanding += report
            .issues
            .iter()
            .filter(|issue| !fixes_written || matches!(issue.kind, IssueKind::InvalidRecord(_)))
            .count();
    }

    if outstanding > 0 {
        bail!("{outstanding} record(s) need attention");
    }
    Ok(())
}

/// Logs a `duct` command line before running it.
trait ExpressionExt {
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run()
            .inspect_err(|_| tracing::error!("command failed: {:?}", self))
    }
}
