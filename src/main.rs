mod cli;
mod settings;
mod workflow;

use anyhow::{Result, anyhow};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::QueryWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	pkgq::logging::initialize(cli.verbose)
		.map_err(|err| anyhow!("failed to initialize logging: {err}"))?;

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_query(cli.output, resolved)
}

/// Build the query and print it in the chosen format.
fn run_query(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let query = QueryWorkflow::from_config(settings).run();

	match format {
		OutputFormat::Plain => print_plain(&query),
		OutputFormat::Json => print_json(&query)?,
	}

	Ok(())
}
