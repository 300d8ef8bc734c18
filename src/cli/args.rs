use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		BoolishValueParser, Styles,
		styling::{AnsiColor, Effects},
	},
};
use pkgq::{ComponentType, app_dirs};

/// Produce the full version banner including the config directory.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("pkgq {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = CliArgs::command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

#[derive(Parser, Debug)]
#[command(
	name = "pkgq",
	version,
	long_version = long_version(),
	about = "Build and print package catalog queries",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `pkgq` binary.
pub(crate) struct CliArgs {
	#[arg(
		value_name = "PACKAGE",
		help = "Package to select, as NAME or NAME:VERSION (default: any package)"
	)]
	pub(crate) package: Option<String>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PKGQ_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 't',
		long = "type",
		value_name = "TYPE",
		action = ArgAction::Append,
		help = "Restrict to a component type: unknown, core, arch, plat, lib or app (repeatable)"
	)]
	pub(crate) types: Option<Vec<ComponentType>>,
	#[arg(
		short = 's',
		long,
		value_name = "SOURCE",
		help = "Only consider packages from this origin (default: any)"
	)]
	pub(crate) source: Option<String>,
	#[arg(
		long = "cache",
		value_name = "BOOL",
		value_parser = BoolishValueParser::new(),
		help = "Allow answering from locally cached data (default: disabled)"
	)]
	pub(crate) cache: Option<bool>,
	#[arg(long, help = "Select every package, as used when pruning")]
	pub(crate) all: bool,
	#[arg(
		long = "no-manifest",
		help = "Leave manifest packages out of a bulk selection"
	)]
	pub(crate) no_manifest: bool,
	#[arg(long = "no-oci", help = "Leave OCI packages out of a bulk selection")]
	pub(crate) no_oci: bool,
	#[arg(
		long = "print-config",
		help = "Print the effective configuration before the query"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Increase log output on stderr (repeatable)"
	)]
	pub(crate) verbose: u8,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the query")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
