use coursemap::{ImpactReport, NodeCategory};

#[test]
fn sample_report_partitions() {
	let _ = env_logger::builder().is_test(true).try_init();

	let graph = coursemap_test_utils::sample_graph();
	let report = ImpactReport::new(&graph, "PHY 23101").expect("physics should be in the sample");

	assert_eq!(report.selected(), "PHY 23101");
	assert_eq!(report.nodes().len(), graph.node_count());
	assert_eq!(report.edges().len(), graph.edge_count());

	let selected: Vec<_> = report.nodes_in(NodeCategory::Selected).map(|n| n.identifier.as_str()).collect();
	assert_eq!(selected, vec!["PHY 23101"]);

	let downstream: Vec<_> = report.nodes_in(NodeCategory::Downstream).map(|n| n.identifier.as_str()).collect();
	assert_eq!(downstream.len(), report.downstream().len());
	for id in &downstream {
		assert!(report.downstream().contains(*id));
	}

	assert_eq!(report.category("MATH 12002").unwrap(), NodeCategory::Unrelated);
	assert_eq!(report.category("ENGR 45600").unwrap(), NodeCategory::Downstream);
	assert_eq!(report.label("ENGR 45600").unwrap(), "Stability II");
}

#[test]
fn report_every_node_has_one_category() {
	let graph = coursemap_test_utils::graph_from_edges(&[("A", "B"), ("B", "A"), ("C", "B")]).unwrap();
	let report = ImpactReport::new(&graph, "A").unwrap();
	let total = report.nodes_in(NodeCategory::Selected).count()
		+ report.nodes_in(NodeCategory::Downstream).count()
		+ report.nodes_in(NodeCategory::Unrelated).count();
	assert_eq!(total, 3);
	assert_eq!(report.category("C").unwrap(), NodeCategory::Unrelated);
	assert_eq!(report.label("C").unwrap(), "C");
}
