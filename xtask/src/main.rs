// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `cargo xtask` for the crewsheet workspace.
//!
//! `cargo xtask ci` is what the pipeline runs: formatting, clippy and every
//! test. The engine crates have no external services, so `test` needs
//! nothing beyond cargo.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::WrapErr};
use duct::cmd;
use tracing_log::AsTrace;

/// Crates that hold the drafting engine, without the HTTP shell.
const ENGINE_CRATES: [&str; 3] = ["crewsheet-domain", "crewsheet", "crewsheet-api"];

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask")]
struct Args {
    #[command(subcommand)]
    task: Task,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Clone, Copy, Debug, Subcommand)]
enum Task {
    /// Formatting check, clippy and the full test suite
    Ci,
    /// Formatting check and clippy with warnings denied
    Lint,
    /// Apply rustfmt and clippy fixes in place
    Fix,
    /// Run every test in the workspace
    Test {
        /// Only test the engine crates, skipping the server
        #[arg(long)]
        engine: bool,
    },
}

/// One cargo invocation.
struct Step {
    label: &'static str,
    args: Vec<&'static str>,
}

impl Step {
    fn new(label: &'static str, args: &[&'static str]) -> Self {
        Self {
            label,
            args: args.to_vec(),
        }
    }

    fn run(&self) -> Result<()> {
        tracing::info!(step = self.label, "cargo {}", self.args.join(" "));
        cmd("cargo", self.args.iter().copied())
            .run()
            .wrap_err_with(|| format!("{} failed", self.label))?;
        Ok(())
    }
}

fn format_check() -> Step {
    Step::new("rustfmt", &["fmt", "--all", "--check"])
}

fn clippy() -> Step {
    Step::new(
        "clippy",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    )
}

fn workspace_tests() -> Step {
    Step::new("tests", &["test", "--workspace"])
}

fn engine_tests() -> Step {
    let mut args: Vec<&'static str> = vec!["test"];
    for name in ENGINE_CRATES {
        args.extend(["--package", name]);
    }
    Step::new("engine tests", &args)
}

impl Task {
    fn steps(self) -> Vec<Step> {
        match self {
            Self::Ci => vec![format_check(), clippy(), workspace_tests()],
            Self::Lint => vec![format_check(), clippy()],
            Self::Fix => vec![
                Step::new("rustfmt", &["fmt", "--all"]),
                Step::new(
                    "clippy --fix",
                    &[
                        "clippy",
                        "--workspace",
                        "--all-targets",
                        "--fix",
                        "--allow-dirty",
                        "--allow-staged",
                    ],
                ),
            ],
            Self::Test { engine: true } => vec![engine_tests()],
            Self::Test { engine: false } => vec![workspace_tests()],
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbosity.log_level_filter().as_trace())
        .without_time()
        .init();

    for step in args.task.steps() {
        step.run()?;
    }
    Ok(())
}
