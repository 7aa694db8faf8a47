//! The result of a downstream impact query in the form handed to a renderer.
//!
//! A report carries every node and edge of the graph, each node tagged with a [`NodeCategory`]
//! and a label. How the categories are drawn is left entirely to the consumer.

use std::collections::{BTreeSet, HashMap};
use serde::{Serialize, Deserialize};

use crate::DependencyGraph;

/// Which partition of the report a node falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeCategory {
	/// The course the query started from.
	Selected,
	/// Depends on the selected course, directly or transitively.
	Downstream,
	Unrelated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportNode {
	pub identifier: String,
	pub label: String,
	pub category: NodeCategory,
}

/// `prerequisite` must be completed before `course`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEdge {
	pub prerequisite: String,
	pub course: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpactReport {
	selected: String,
	downstream: BTreeSet<String>,
	nodes: Vec<ReportNode>,
	edges: Vec<ReportEdge>,
	#[serde(skip)]
	index: HashMap<String, usize>,
}

impl ImpactReport {
	/// Runs the downstream impact query for `selected` and classifies every node of `graph`.
	/// # Errors
	/// - [`NotFound`](crate::Error::NotFound) when `selected` is not a node of `graph`.
	pub fn new(graph: &DependencyGraph, selected: &str) -> crate::Result<Self> {
		let downstream: BTreeSet<String> = graph.downstream_impact(selected)?.into_iter().collect();

		let nodes: Vec<ReportNode> = graph.nodes()
			.map(|n| {
				let category = if n.identifier() == selected {
					NodeCategory::Selected
				} else if downstream.contains(n.identifier()) {
					NodeCategory::Downstream
				} else {
					NodeCategory::Unrelated
				};
				ReportNode { identifier: n.identifier().to_owned(), label: n.label().to_owned(), category }
			})
			.collect();

		let edges = graph.edges()
			.map(|(prerequisite, course)| ReportEdge { prerequisite: prerequisite.to_owned(), course: course.to_owned() })
			.collect();

		let index = nodes.iter()
			.enumerate()
			.map(|(i, n)| (n.identifier.clone(), i))
			.collect();

		log::debug!("Impact report for {}: {} of {} courses downstream", selected, downstream.len(), nodes.len());

		Ok(Self { selected: selected.to_owned(), downstream, nodes, edges, index })
	}

	pub fn selected(&self) -> &str {
		&self.selected
	}

	/// Identifiers of every downstream course, sorted.
	pub fn downstream(&self) -> &BTreeSet<String> {
		&self.downstream
	}

	/// Every node of the graph in creation order.
	pub fn nodes(&self) -> &[ReportNode] {
		&self.nodes
	}

	pub fn edges(&self) -> &[ReportEdge] {
		&self.edges
	}

	fn node(&self, identifier: &str) -> crate::Result<&ReportNode> {
		self.index.get(identifier)
			.map(|&i| &self.nodes[i])
			.ok_or_else(|| crate::Error::NotFound(identifier.to_owned()))
	}

	/// # Errors
	/// - [`NotFound`](crate::Error::NotFound) when `identifier` is not a node.
	pub fn category(&self, identifier: &str) -> crate::Result<NodeCategory> {
		Ok(self.node(identifier)?.category)
	}

	/// # Errors
	/// - [`NotFound`](crate::Error::NotFound) when `identifier` is not a node.
	pub fn label(&self, identifier: &str) -> crate::Result<&str> {
		Ok(self.node(identifier)?.label.as_str())
	}

	/// Nodes in `category`, in creation order.
	pub fn nodes_in(&self, category: NodeCategory) -> impl Iterator<Item = &ReportNode> {
		self.nodes.iter().filter(move |n| n.category == category)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{Catalog, CourseRecord};

	fn report(selected: &str) -> crate::Result<ImpactReport> {
		let catalog = Catalog::new([
			CourseRecord::new("A", "Alpha", &[]),
			CourseRecord::new("B", "Bravo", &["A", "X"]),
			CourseRecord::new("C", "Charlie", &["B"]),
			CourseRecord::new("D", "Delta", &[]),
		])?;
		ImpactReport::new(&DependencyGraph::build(&catalog), selected)
	}

	#[test]
	fn report_partitions_every_node() {
		let r = report("A").unwrap();
		assert_eq!(r.category("A").unwrap(), NodeCategory::Selected);
		assert_eq!(r.category("B").unwrap(), NodeCategory::Downstream);
		assert_eq!(r.category("C").unwrap(), NodeCategory::Downstream);
		assert_eq!(r.category("D").unwrap(), NodeCategory::Unrelated);
		assert_eq!(r.category("X").unwrap(), NodeCategory::Unrelated);
		assert_eq!(r.nodes().len(), 5);
		assert_eq!(r.nodes_in(NodeCategory::Selected).count(), 1);
	}

	#[test]
	fn report_downstream_matches_query() {
		let r = report("X").unwrap();
		assert_eq!(r.downstream().iter().map(String::as_str).collect::<Vec<_>>(), vec!["B", "C"]);
		assert_eq!(r.nodes_in(NodeCategory::Downstream).count(), 2);
	}

	#[test]
	fn report_labels_placeholder_with_identifier() {
		let r = report("A").unwrap();
		assert_eq!(r.label("B").unwrap(), "Bravo");
		assert_eq!(r.label("X").unwrap(), "X");
	}

	#[test]
	fn report_keeps_all_edges() {
		let r = report("D").unwrap();
		assert_eq!(r.edges().len(), 3);
		assert!(r.edges().contains(&ReportEdge { prerequisite: "X".into(), course: "B".into() }));
		assert!(r.downstream().is_empty());
	}

	#[test]
	fn report_unknown_selection_is_not_found() {
		assert!(matches!(report("NOT-A-REAL-COURSE"), Err(crate::Error::NotFound(_))));
		assert!(matches!(report("A").unwrap().category("Z"), Err(crate::Error::NotFound(_))));
	}

	#[test]
	fn report_serializes_categories() {
		let value = serde_json::to_value(report("A").unwrap()).unwrap();
		assert_eq!(value["selected"], "A");
		assert_eq!(value["nodes"][0]["category"], "Selected");
		assert_eq!(value["downstream"][0], "B");
		assert!(value.get("index").is_none());
	}
}
