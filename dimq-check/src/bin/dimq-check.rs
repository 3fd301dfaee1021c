//! dimq self-check binary.
//!
//! # Usage
//!
//! ```bash
//! dimq-check                       # every suite, defaults
//! dimq-check --config checks.toml  # explicit configuration file
//! ```
//!
//! # Environment Variables
//!
//! - `DIMQ_CHECK_CONFIG`: configuration file used when `--config` is absent
//! - `RUST_LOG`: tracing filter directives (`debug`, `info,dimq_check=debug`, …), overrides `[log] level`

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use dimq_check::{checks, CheckConfig, Checker};

fn config_path() -> anyhow::Result<Option<PathBuf>> {
    let mut args = env::args().skip(1);
    let mut path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let value = args.next().context("`--config` needs a path")?;
                path = Some(PathBuf::from(value));
            }
            other => bail!("unexpected argument `{other}`"),
        }
    }
    Ok(path)
}

fn main() -> anyhow::Result<ExitCode> {
    let config = CheckConfig::load(config_path()?.as_deref()).context("loading configuration")?;

    let filter = config.env_filter(env::var("RUST_LOG").ok().as_deref())?;
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let suites = config.selected_suites();
    info!(
        suites = ?suites.iter().map(|s| s.name).collect::<Vec<_>>(),
        "starting dimq checks"
    );

    let mut checker = Checker::new().verbose(config.run.verbose);
    checks::run_suites(&suites, &mut checker);

    for failure in checker.failures() {
        println!("{failure}\n");
    }
    let summary = checker.summary();
    println!("\n{summary}");

    Ok(ExitCode::from(summary.exit_code()))
}
