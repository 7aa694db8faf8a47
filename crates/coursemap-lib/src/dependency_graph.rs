//! Prerequisite graph built from a [`Catalog`](crate::Catalog) and the downstream impact query.
//!
//! An edge `P -> C` means `P` must be completed before `C`,
//! so following edges forward answers "what depends on `P`".

use std::collections::{HashMap, HashSet};

use petgraph::prelude::*;
use serde::Deserialize;

use crate::catalog::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
	/// Node has a record in the catalog, contains the identifier and display name.
	Course(String, String),
	/// Node is only referenced as a prerequisite and has no record of its own.
	Placeholder(String),
}

impl NodeData {
	pub fn identifier(&self) -> &str {
		match self {
			NodeData::Course(id, _) | NodeData::Placeholder(id) => id,
		}
	}

	/// Display name, `None` for placeholders.
	pub fn name(&self) -> Option<&str> {
		if let NodeData::Course(_, name) = self { Some(name.as_str()) } else { None }
	}

	/// Human readable label, the display name or the raw identifier when there is no record.
	pub fn label(&self) -> &str {
		self.name().unwrap_or_else(|| self.identifier())
	}

	pub fn is_placeholder(&self) -> bool {
		matches!(self, NodeData::Placeholder(_))
	}
}

/// Read-only directed graph of courses.
///
/// Built once with [`DependencyGraph::build()`] and never mutated afterwards.
/// A changed catalog requires building a new graph.
///
/// Dangling prerequisites, self-references and cycles are all accepted.
///
/// Deserializes from the JSON form of a [`Catalog`] and is built from it, the node storage itself is never read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Catalog")]
pub struct DependencyGraph {
	graph: DiGraph<NodeData, ()>,
	indices: HashMap<String, NodeIndex>,
}

impl From<Catalog> for DependencyGraph {
	fn from(value: Catalog) -> Self {
		DependencyGraph::build(&value)
	}
}

impl DependencyGraph {
	/// Builds the graph from every record in `catalog`.
	pub fn build(catalog: &Catalog) -> Self {
		let mut dep_graph = Self::default();

		for record in catalog {
			let course = dep_graph.add_course_node(record);

			/* A prerequisite listed twice is still only one edge */
			let mut seen = HashSet::<&str>::with_capacity(record.prereqs().len());
			for prereq in record.prereqs() {
				if !seen.insert(prereq) { continue; }
				let p = dep_graph.get_or_add_node_index(prereq);
				dep_graph.graph.add_edge(p, course, ());
			}
		}

		log::debug!("Built dependency graph with {} nodes and {} edges from {} courses", dep_graph.node_count(), dep_graph.edge_count(), catalog.len());
		dep_graph
	}

	/// Adds the node for `record` or upgrades the placeholder already standing in for it.
	fn add_course_node(&mut self, record: &CourseRecord) -> NodeIndex {
		let data = NodeData::Course(record.identifier().to_owned(), record.name().to_owned());
		if let Some(&i) = self.indices.get(record.identifier()) {
			/* Referenced as a prerequisite before its own record */
			self.graph[i] = data;
			i
		} else {
			let i = self.graph.add_node(data);
			self.indices.insert(record.identifier().to_owned(), i);
			i
		}
	}

	/// Returns the index of the existing node or a new `Placeholder` node with `identifier`
	fn get_or_add_node_index(&mut self, identifier: &str) -> NodeIndex {
		if let Some(&i) = self.indices.get(identifier) {
			return i;
		}
		log::debug!("Adding placeholder node for {}", identifier);
		let i = self.graph.add_node(NodeData::Placeholder(identifier.to_owned()));
		self.indices.insert(identifier.to_owned(), i);
		i
	}

	fn index_of(&self, identifier: &str) -> crate::Result<NodeIndex> {
		self.indices.get(identifier)
			.copied()
			.ok_or_else(|| crate::Error::NotFound(identifier.to_owned()))
	}

	pub fn contains(&self, identifier: &str) -> bool {
		self.indices.contains_key(identifier)
	}

	/// # Errors
	/// - [`NotFound`](crate::Error::NotFound) when `identifier` is not a node.
	pub fn node(&self, identifier: &str) -> crate::Result<&NodeData> {
		Ok(&self.graph[self.index_of(identifier)?])
	}

	/// Display name of the node or its identifier for placeholders.
	pub fn label(&self, identifier: &str) -> crate::Result<&str> {
		Ok(self.node(identifier)?.label())
	}

	/// Every node in the order it was created.
	pub fn nodes(&self) -> impl Iterator<Item = &NodeData> {
		self.graph.node_weights()
	}

	pub fn node_identifiers(&self) -> impl Iterator<Item = &str> {
		self.nodes().map(|n| n.identifier())
	}

	/// Every edge as `(prerequisite, course)`.
	pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
		self.graph.edge_references().map(|e| (self.graph[e.source()].identifier(), self.graph[e.target()].identifier()))
	}

	/// Courses listing `identifier` as a direct prerequisite.
	/// # Errors
	/// - [`NotFound`](crate::Error::NotFound) when `identifier` is not a node.
	pub fn successors(&self, identifier: &str) -> crate::Result<Vec<&str>> {
		let i = self.index_of(identifier)?;
		Ok(self.graph.neighbors_directed(i, Outgoing).map(|n| self.graph[n].identifier()).collect())
	}

	pub fn node_count(&self) -> usize {
		self.graph.node_count()
	}

	pub fn edge_count(&self) -> usize {
		self.graph.edge_count()
	}

	/// Every course reachable from `start` by following one or more edges.
	///
	/// `start` is never part of the result, even when a cycle or self-loop leads back to it.
	/// The result is unordered.
	/// # Errors
	/// - [`NotFound`](crate::Error::NotFound) when `start` is not a node.
	pub fn downstream_impact(&self, start: &str) -> crate::Result<HashSet<String>> {
		let start_index = self.index_of(start)?;

		let mut visited = HashSet::<NodeIndex>::with_capacity(self.graph.node_count());
		let mut stack = vec![start_index];
		while let Some(i) = stack.pop() {
			if !visited.insert(i) { continue; }
			stack.extend(self.graph.neighbors_directed(i, Outgoing));
		}
		visited.remove(&start_index);

		log::trace!("{} courses downstream of {}", visited.len(), start);
		Ok(visited.into_iter().map(|i| self.graph[i].identifier().to_owned()).collect())
	}
}
