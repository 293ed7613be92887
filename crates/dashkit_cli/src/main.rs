#![allow(missing_docs)]

use clap::{Parser, Subcommand};

use crate::cmd::iterate::Op;

mod cmd;

#[derive(Parser)]
#[command(name = "dashkit", about = "Path lookups and collection queries over JSON documents")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Resolve one path, falling back to `--default` when it is missing.
	Get(cmd::get::GetArgs),
	/// Resolve several paths in order.
	At(cmd::get::AtArgs),
	/// Show the key sequence a path parses into.
	Keys(cmd::keys::Args),
	/// Apply the iteratee to every entry.
	Map(cmd::iterate::Args),
	/// Keep entries the iteratee finds truthy.
	Filter(cmd::iterate::Args),
	/// Check the iteratee holds for every entry.
	Every(cmd::iterate::Args),
	/// Count entries grouped by the iteratee's string form.
	CountBy(cmd::iterate::Args),
	/// Report how a value is classified and traversed.
	Inspect(cmd::inspect::Args),
}

fn main() {
	env_logger::init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> dashkit::collection::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Get(args) => cmd::get::run_get(args),
		Commands::At(args) => cmd::get::run_at(args),
		Commands::Keys(args) => cmd::keys::run(args),
		Commands::Map(args) => cmd::iterate::run(Op::Map, args),
		Commands::Filter(args) => cmd::iterate::run(Op::Filter, args),
		Commands::Every(args) => cmd::iterate::run(Op::Every, args),
		Commands::CountBy(args) => cmd::iterate::run(Op::CountBy, args),
		Commands::Inspect(args) => cmd::inspect::run(args),
	}
}
