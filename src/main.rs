mod cmd;

use anyhow::Context;
use clap::Parser;
use cmd::*;
use sequence_walker::runner::{WalkConfig, run, run_demo};
use sequence_walker::tracer::{level_from_verbosity, setup_tracing};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_tracing(level_from_verbosity(args.verbose), args.log_json)?;

    let config = WalkConfig::from(&args.walk);
    debug!(?config, cmd = ?args.cmd, "starting");

    let stdout = std::io::stdout().lock();
    let sequence = match args.cmd.pattern() {
        Some(pattern) => {
            run(pattern, &config, stdout).with_context(|| format!("{pattern} walk failed"))?
        }
        None => run_demo(&config, stdout).context("demo failed")?,
    };
    debug!(sequence = ?sequence.into_inner(), "done");

    Ok(())
}
