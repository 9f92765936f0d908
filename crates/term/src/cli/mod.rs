use std::path::PathBuf;

use clap::Parser;


#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "Replay keystrokes against the Quill mention menu")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Config file (defaults to the user config, if any)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Initial document text; the caret starts at its end
	#[arg(long, default_value = "")]
	pub text: String,

	/// Whitespace-separated key script, e.g. "@ p r o <down> <ret>"
	#[arg(long, short = 'k', default_value = "")]
	pub keys: String,

	/// Viewport width in cells
	#[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u16).range(1..))]
	pub width: u16,

	/// Viewport height in cells
	#[arg(long, default_value_t = 24, value_parser = clap::value_parser!(u16).range(1..))]
	pub height: u16,

	/// Verbose logging
	#[arg(long, short)]
	pub verbose: bool,
}
