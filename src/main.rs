/*!
 * Command-line interface for code2text
 */

use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use code2text::config::{Args, Config};
use code2text::git::{is_git_url, GitProgress};
use code2text::{pipeline, TracingSink};

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "code2text", &mut io::stdout());
        return Ok(());
    }

    let config = Config::from_args(args);
    init_tracing(config.verbose);

    let progress = if is_git_url(&config.input) {
        clone_spinner()
    } else {
        ProgressBar::hidden()
    };
    let reporter = |p: &GitProgress| progress.set_message(p.message());

    let result = pipeline::run(&config, Arc::new(TracingSink), Some(&reporter));
    progress.finish_and_clear();

    let output = result?;
    println!("📄 Output written to {}", output.display());

    Ok(())
}

fn clone_spinner() -> ProgressBar {
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.set_prefix("📥 Cloning");
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "code2text=info" } else { "code2text=warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
