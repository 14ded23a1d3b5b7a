use std::io::Read;
use std::process;

use clap::Parser;
use metainject_cli::MetainjectCli;
use metainject_core::Bundle;
use metainject_core::InjectError;
use metainject_core::InjectResult;
use metainject_core::InjectSummary;
use metainject_core::Injector;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

fn main() {
	let args = MetainjectCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(args.verbose, use_color);

	match run(&args) {
		Ok(summary) => print_summary(&summary, use_color),
		Err(e) => {
			let report = miette::Report::new(e);
			eprintln!("{report:?}");
			process::exit(2);
		}
	}
}

fn init_tracing(verbose: bool, use_color: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.try_init();
}

fn run(args: &MetainjectCli) -> InjectResult<InjectSummary> {
	let config = args.inject_config()?;
	let injector = Injector::new(config)?;

	tracing::debug!(format = args.format.as_str(), "reading bundle from stdin");
	let mut input = String::new();
	std::io::stdin().read_to_string(&mut input)?;

	let mut bundle = Bundle::parse(&input, args.format.as_str(), &args.byte_keys)?;
	let summary = injector.run(&mut bundle.files, &bundle.metadata);

	let output = serde_json::to_string_pretty(&bundle.files_to_json()).map_err(|e| {
		InjectError::DataFile {
			source_name: "output".to_string(),
			reason: e.to_string(),
		}
	})?;
	println!("{output}");

	Ok(summary)
}

fn print_summary(summary: &InjectSummary, use_color: bool) {
	let files = if summary.matched_files == 1 {
		"file"
	} else {
		"files"
	};
	let line = format!(
		"Processed {} {files} ({} key checks)",
		summary.matched_files, summary.invocations
	);

	if use_color {
		eprintln!("{}", line.green());
	} else {
		eprintln!("{line}");
	}
}
