use coursemap::{Catalog, CourseMapConfig, DependencyGraph, ImpactReport, NodeCategory};

fn main() -> std::process::ExitCode {
	let mut opts;

	/* Parse console input */
	let parsed_options = {
		let args: Vec<String> = std::env::args().collect();

		opts = getopts::Options::new();
		opts.optflag( "h", "help",    "Show help");
		opts.optflag( "v", "verbose", "Increased vebosity");
		opts.optflag( "l", "list",    "List every course in the catalog");
		opts.optflag( "j", "json",    "Print the impact report as JSON");
		opts.optopt(  "c", "catalog", "Read the catalog from a JSON file instead of the sample", "FILE");
		opts.parsing_style(getopts::ParsingStyle::FloatingFrees);

		let parsed_options = match opts.parse(&args[1..]) {
			Ok(m)  => { m }
			Err(e) => { println!("Unable to parse options: {}", e); return std::process::ExitCode::FAILURE }
		};

		if parsed_options.opt_present("h") {
			eprintln!("{}", opts.usage("Usage: coursemap [options] [COURSE]"));
			return std::process::ExitCode::SUCCESS;
		}

		parsed_options
	};

	let default_filter = if parsed_options.opt_present("v") { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

	let config = CourseMapConfig::load_from_disk().unwrap_or_else(|e| {
		log::warn!("Failed to read config file: {}", e);
		log::warn!("Using default config.");
		CourseMapConfig::default()
	});

	match run(&config, &parsed_options) {
		Ok(_) => std::process::ExitCode::SUCCESS,
		Err(e) => {
			log::error!("{}", e);
			std::process::ExitCode::FAILURE
		}
	}
}

fn run(config: &CourseMapConfig, parsed_options: &getopts::Matches) -> Result<(), Error> {
	let catalog = load_catalog(config, parsed_options.opt_str("c"))?;

	if parsed_options.opt_present("l") {
		print!("{}", format_course_list(&catalog));
		return Ok(());
	}

	let selected = resolve_selection(config, parsed_options.free.first().map(String::as_str), &catalog)?;
	log::debug!("Selected course {}", selected);

	let report = build_report(&catalog, &selected)?;

	if parsed_options.opt_present("j") {
		println!("{}", serde_json::to_string_pretty(&report)?);
	} else {
		print!("{}", format_report(&report));
	}
	Ok(())
}

/// Course from the command line, then the config default, then the first course in the catalog.
fn resolve_selection(config: &CourseMapConfig, course_arg: Option<&str>, catalog: &Catalog) -> Result<String, Error> {
	match course_arg.or(config.default_selection()) {
		Some(s) => Ok(s.to_owned()),
		None => catalog.all_identifiers().first().map(|s| s.to_string()).ok_or(Error::EmptyCatalog),
	}
}

fn build_report(catalog: &Catalog, selected: &str) -> Result<ImpactReport, Error> {
	let graph = DependencyGraph::build(catalog);
	ImpactReport::new(&graph, selected).map_err(|e| match e {
		coursemap::Error::NotFound(id) => Error::UnknownCourse(id),
		e => Error::CourseMap(e),
	})
}

/// Catalog from the command line, then the config, then the built-in sample.
fn load_catalog(config: &CourseMapConfig, catalog_arg: Option<String>) -> Result<Catalog, Error> {
	let path = catalog_arg.map(std::path::PathBuf::from)
		.or_else(|| config.catalog_path().map(|p| p.to_path_buf()));

	match path {
		Some(path) => Ok(Catalog::load_from_file(path)?),
		None => {
			log::debug!("No catalog file given, using the sample catalog.");
			Ok(Catalog::sample())
		}
	}
}

fn format_course_list(catalog: &Catalog) -> String {
	catalog.iter()
		.map(|record| format!("{}\t{}\n", record.identifier(), record.name()))
		.collect()
}

fn format_report(report: &ImpactReport) -> String {
	let mut out = format!("Dependencies from {}\n", report.selected());

	if report.downstream().is_empty() {
		out.push_str("\tNo courses depend on it.\n");
	}
	for id in report.downstream() {
		let label = report.label(id).unwrap_or(id);
		out.push_str(&format!("\t{}\t{}\n", id, label));
	}

	/* Downstream courses are already listed above */
	for (category, heading) in [
		(NodeCategory::Selected, "Selected"),
		(NodeCategory::Unrelated, "Other"),
	] {
		out.push_str(&format!("{}:\n", heading));
		for node in report.nodes_in(category) {
			out.push_str(&format!("\t{}\t{}\n", node.identifier, node.label));
		}
	}

	out.push_str("Selected = selected course | Dependencies = courses that depend on it | Other = unrelated courses\n");
	out
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("CourseMap error: {0}")]
	CourseMap(#[from] coursemap::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
	#[error("Course not in catalog: {0}")]
	UnknownCourse(String),
	#[error("Catalog has no courses")]
	EmptyCatalog,
}
