pub mod error;
pub use error::Result;
pub use error::Error;

pub mod catalog;
pub use catalog::Catalog;
pub use catalog::CourseRecord;

pub mod dependency_graph;
pub use dependency_graph::DependencyGraph;
pub use dependency_graph::NodeData;

pub mod impact;
pub use impact::ImpactReport;
pub use impact::NodeCategory;

pub mod config;
pub use config::CourseMapConfig;
