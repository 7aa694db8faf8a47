use super::*;

/// Aerospace engineering sequence, `(identifier, name, prerequisites)`.
const SAMPLE_COURSES: [(&str, &str, &[&str]); 11] = [
	("MATH 12002", "Calculus I", &[]),
	("MATH 12003", "Calculus II", &["MATH 12002"]),
	("PHY 23101", "Physics I", &["MATH 12002"]),
	("PHY 23102", "Physics II", &["PHY 23101"]),
	("ENGR 25200", "Statics", &["PHY 23101"]),
	("ENGR 25400", "Dynamics", &["ENGR 25200"]),
	("ENGR 25500", "Aero I", &["ENGR 25400"]),
	("ENGR 35600", "Aero II", &["ENGR 25500"]),
	("ENGR 45600", "Stability II", &["ENGR 35600"]),
	("ENGR 48099", "Capstone I", &[]),
	("ENGR 48199", "Capstone II", &["ENGR 48099"]),
];

impl Catalog {
	/// The built-in sample catalog.
	pub fn sample() -> Self {
		let records: Vec<_> = SAMPLE_COURSES.iter()
			.map(|(identifier, name, prereqs)| CourseRecord::new(*identifier, *name, prereqs))
			.collect();
		let index = records.iter()
			.enumerate()
			.map(|(i, r)| (r.identifier.clone(), i))
			.collect();
		Self { records, index }
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test] fn sample_has_all_courses() { assert_eq!(Catalog::sample().len(), 11) }
	#[test] fn sample_first_course_is_calculus() { assert_eq!(Catalog::sample().all_identifiers()[0], "MATH 12002") }
	#[test] fn sample_capstone_requires_capstone_i() { assert_eq!(Catalog::sample().get("ENGR 48199").unwrap().prereqs(), ["ENGR 48099".to_string()]) }

	#[test]
	fn sample_identifiers_are_unique() {
		let sample = Catalog::sample();
		assert!(Catalog::new(sample.iter().cloned()).is_ok());
	}
}
