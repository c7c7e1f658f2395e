mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Assemble a header from bounding boxes and options and describe it
	Describe(tools::describe::Subcommand),

	/// Join bounding boxes into a single one
	Join(tools::join::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
	match &cli.command {
		Commands::Describe(arguments) => tools::describe::run(arguments),
		Commands::Join(arguments) => tools::join::run(arguments),
	}
}
