// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `ion-assets`: writes the resource headers for the ion Windows simulator.
//!
//! Invariants:
//! - Configuration is validated before any file is read or written.
//! - The registry is built once and shared by every requested artifact.
//! - Unrequested artifacts are never created or modified.

mod plan;

use anyhow::{Context, Result};
use clap::Parser;
use ion_assets::{write_artifact, WriteOutcome};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::plan::{Cli, Plan};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    run(Plan::try_from(cli)?)
}

fn run(plan: Plan) -> Result<()> {
    debug!(?plan, "resolved plan");
    let registry = plan
        .source
        .load()
        .context("failed to load asset list")?;
    debug!(assets = registry.len(), "registry built");

    for (kind, path) in &plan.outputs {
        let text = kind.render(&registry);
        let outcome =
            write_artifact(path, &text).with_context(|| format!("failed to generate {kind}"))?;
        match outcome {
            WriteOutcome::Written => info!(path = %path.display(), "wrote {kind}"),
            WriteOutcome::Unchanged => info!(path = %path.display(), "{kind} up to date"),
        }
    }
    Ok(())
}
