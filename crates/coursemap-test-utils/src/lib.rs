//! Various helper functions for testing
//!
//! functions in this module should use results and not use any panics to avoid confusion in callers

use std::io::Write;

use coursemap::{Catalog, CourseRecord, DependencyGraph};

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("coursemap error: {0}")]
	CourseMap(#[from] coursemap::Error),
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
}

/// Builds a catalog from `(prerequisite, course)` pairs.
///
/// Every identifier appearing as a course gets a record named after itself, in order of first appearance.
/// Identifiers only appearing as prerequisites get no record and become placeholders in the graph.
pub fn catalog_from_edges(edges: &[(&str, &str)]) -> Result<Catalog, Error> {
	let mut order = Vec::<&str>::new();
	for (_, course) in edges {
		if !order.contains(course) {
			order.push(*course);
		}
	}

	let records = order.into_iter().map(|course| {
		let prereqs: Vec<&str> = edges.iter()
			.filter(|(_, c)| *c == course)
			.map(|(p, _)| *p)
			.collect();
		CourseRecord::new(course, course, &prereqs)
	});

	Ok(Catalog::new(records)?)
}

/// Graph of `(prerequisite, course)` pairs, see [`catalog_from_edges()`].
pub fn graph_from_edges(edges: &[(&str, &str)]) -> Result<DependencyGraph, Error> {
	Ok(DependencyGraph::build(&catalog_from_edges(edges)?))
}

/// Graph of the built-in sample catalog.
pub fn sample_graph() -> DependencyGraph {
	DependencyGraph::build(&Catalog::sample())
}

/// Writes `catalog` as JSON to a temporary file that is removed when dropped.
pub fn write_catalog_file(catalog: &Catalog) -> Result<tempfile::NamedTempFile, Error> {
	let mut f = tempfile::NamedTempFile::new()?;
	serde_json::to_writer_pretty(&mut f, catalog)?;
	f.flush()?;
	Ok(f)
}

/// Writes raw `contents` to a temporary file, for malformed input.
pub fn write_temp_file(contents: &str) -> Result<tempfile::NamedTempFile, Error> {
	let mut f = tempfile::NamedTempFile::new()?;
	f.write_all(contents.as_bytes())?;
	f.flush()?;
	Ok(f)
}
