//! # Course catalog
//!
//! The fixed set of courses a [`DependencyGraph`](crate::DependencyGraph) is built from.
//!
//! A catalog is supplied once at startup, either the built-in [`Catalog::sample()`]
//! or a JSON file read with [`Catalog::load_from_file()`], and is never changed afterwards.
//! The JSON form is an ordered array of records:
//! ```json
//! [
//! 	{ "identifier": "MATH 12002", "name": "Calculus I", "prereqs": [] },
//! 	{ "identifier": "MATH 12003", "name": "Calculus II", "prereqs": ["MATH 12002"] }
//! ]
//! ```

use std::collections::HashMap;
use serde::{Serialize, Deserialize};

mod sample;

/// A single course and the courses which must be completed before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
	identifier: String,
	name: String,
	/// Identifiers of prerequisite courses, these do not have to exist in the catalog.
	#[serde(default)]
	prereqs: Vec<String>,
}

impl CourseRecord {
	pub fn new(identifier: impl Into<String>, name: impl Into<String>, prereqs: &[&str]) -> Self {
		Self {
			identifier: identifier.into(),
			name: name.into(),
			prereqs: prereqs.iter().map(|p| p.to_string()).collect(),
		}
	}

	pub fn identifier(&self) -> &str {
		&self.identifier
	}

	/// Display name of the course.
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn prereqs(&self) -> &[String] {
		&self.prereqs
	}
}

/// An immutable mapping of identifiers to [`CourseRecord`]s.
///
/// Records keep the order they were given in, this is the order used when presenting a list to select from.
/// The catalog is not required to be acyclic or closed, a prerequisite may name a course that has no record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<CourseRecord>", into = "Vec<CourseRecord>")]
pub struct Catalog {
	records: Vec<CourseRecord>,
	index: HashMap<String, usize>,
}

impl Catalog {
	/// Creates a catalog from `records` in the given order.
	/// # Errors
	/// - [`AlreadyExists`](crate::Error::AlreadyExists) when two records share an identifier.
	pub fn new(records: impl IntoIterator<Item = CourseRecord>) -> crate::Result<Self> {
		let mut catalog = Self::default();
		for record in records {
			if catalog.index.contains_key(record.identifier()) {
				return Err(crate::Error::AlreadyExists(record.identifier));
			}
			catalog.index.insert(record.identifier.clone(), catalog.records.len());
			catalog.records.push(record);
		}
		Ok(catalog)
	}

	/// Reads a catalog from a JSON file.
	/// # Errors
	/// - [`IO`](crate::Error::IO) when the file can't be read.
	/// - [`SerdeJSON`](crate::Error::SerdeJSON) when the contents are malformed or contain a duplicate identifier.
	pub fn load_from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
		let path = path.as_ref();
		log::debug!("Reading catalog from {}", path.display());
		let file = std::fs::File::open(path)?;
		let catalog: Catalog = serde_json::from_reader(std::io::BufReader::new(file))?;
		log::info!("Loaded {} courses from {}", catalog.len(), path.display());
		Ok(catalog)
	}

	/// Gets the record for `identifier`.
	/// # Errors
	/// - [`NotFound`](crate::Error::NotFound) when there is no such course.
	pub fn get(&self, identifier: &str) -> crate::Result<&CourseRecord> {
		self.index.get(identifier)
			.map(|&i| &self.records[i])
			.ok_or_else(|| crate::Error::NotFound(identifier.to_owned()))
	}

	pub fn contains(&self, identifier: &str) -> bool {
		self.index.contains_key(identifier)
	}

	/// Every identifier in insertion order.
	pub fn all_identifiers(&self) -> Vec<&str> {
		self.records.iter().map(|r| r.identifier()).collect()
	}

	/// Records in insertion order.
	pub fn iter(&self) -> std::slice::Iter<'_, CourseRecord> {
		self.records.iter()
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl<'a> IntoIterator for &'a Catalog {
	type Item = &'a CourseRecord;
	type IntoIter = std::slice::Iter<'a, CourseRecord>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl TryFrom<Vec<CourseRecord>> for Catalog {
	type Error = crate::Error;

	fn try_from(value: Vec<CourseRecord>) -> Result<Self, Self::Error> {
		Catalog::new(value)
	}
}

impl From<Catalog> for Vec<CourseRecord> {
	fn from(value: Catalog) -> Self {
		value.records
	}
}
