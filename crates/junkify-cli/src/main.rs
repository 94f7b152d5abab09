use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod batch;
mod cli;
mod limit;

use batch::Summary;
use cli::{Cli, Mode};

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(&cli) {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(summary) => {
            tracing::warn!(
                processed = summary.processed,
                failed = summary.failed,
                skipped = summary.skipped,
                "some images could not be junkified"
            );
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Summary> {
    let Some(mode) = cli.mode() else {
        bail!("file name required: pass --file or --in-dir");
    };

    if let Some(jobs) = cli.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(usize::from(jobs))
            .build_global()
            .context("configuring worker pool")?;
    }

    match mode {
        Mode::Directory { in_dir, out_dir } => {
            batch::reduce_directory(&in_dir, &out_dir, cli.bytes_limit)
        }
        Mode::File { file, out_dir } => {
            Ok(batch::reduce_all(std::slice::from_ref(&file), &out_dir, cli.bytes_limit))
        }
    }
}
