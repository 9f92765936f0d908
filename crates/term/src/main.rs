//! Quill command-line driver.
//!
//! Loads the notes/todos catalog, replays a key script against an editor with
//! the mention menu attached, and prints every menu frame followed by the
//! final document.

mod cli;
mod replay;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use quill_config::Config;
use quill_primitives::{Rect, parse_keys};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let config = match &cli.config {
		Some(path) => Config::load(path).with_context(|| format!("failed to load config {}", path.display()))?,
		None => Config::load_default().context("failed to load user config")?,
	};
	for warning in &config.warnings {
		warn!(%warning, "config");
	}

	let keys = parse_keys(&cli.keys).context("invalid key script")?;
	info!(keys = keys.len(), notes = config.notes.len(), todos = config.todos.len(), "replaying");

	let viewport = Rect::new(0, 0, cli.width, cli.height);
	let transcript = replay::replay(&config, &cli.text, &keys, viewport);
	println!("{transcript}");
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("QUILL_LOG")
		.or_else(|_| EnvFilter::try_from_default_env())
		.unwrap_or_else(|_| {
			if verbose {
				EnvFilter::new("quill=debug,quill_config=debug,quill_editor=debug,quill_mention=debug,warn")
			} else {
				EnvFilter::new("warn")
			}
		});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}
