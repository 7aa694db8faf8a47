#[test]
fn catalog_file_round_trips_sample() {
	let sample = coursemap::Catalog::sample();
	let f = coursemap_test_utils::write_catalog_file(&sample).expect("failed to write catalog file");
	let loaded = coursemap::Catalog::load_from_file(f.path()).expect("failed to read catalog file");
	assert_eq!(loaded.all_identifiers(), sample.all_identifiers());
	assert_eq!(loaded.get("ENGR 25500").unwrap().name(), "Aero I");
}

#[test]
fn catalog_file_with_dangling_prerequisite() {
	let f = coursemap_test_utils::write_temp_file(r#"[
		{ "identifier": "AERO 101", "name": "Intro to Flight", "prereqs": ["MATH 100"] },
		{ "identifier": "AERO 201", "name": "Propulsion", "prereqs": ["AERO 101"] }
	]"#).unwrap();
	let catalog = coursemap::Catalog::load_from_file(f.path()).unwrap();
	assert!(matches!(catalog.get("MATH 100"), Err(coursemap::Error::NotFound(_))));

	let graph = coursemap::DependencyGraph::build(&catalog);
	assert_eq!(graph.node_count(), 3);
	assert_eq!(graph.label("MATH 100").unwrap(), "MATH 100");
	assert_eq!(graph.downstream_impact("MATH 100").unwrap().len(), 2);
}

#[test]
fn catalog_file_duplicate_is_rejected() {
	let f = coursemap_test_utils::write_temp_file(r#"[
		{ "identifier": "AERO 101", "name": "Intro to Flight" },
		{ "identifier": "AERO 101", "name": "Intro to Flight" }
	]"#).unwrap();
	assert!(matches!(coursemap::Catalog::load_from_file(f.path()), Err(coursemap::Error::SerdeJSON(_))));
}

#[test]
fn catalog_file_missing_is_io_error() {
	let dir = tempfile::tempdir().unwrap();
	assert!(matches!(coursemap::Catalog::load_from_file(dir.path().join("missing.json")), Err(coursemap::Error::IO(_))));
}
