use serde::{Serialize, Deserialize};

/// User settings for the course map front ends.
///
/// Stored as `config.json` in [`CourseMapConfig::config_dir()`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseMapConfig {
	/// Catalog JSON used instead of the built-in sample.
	catalog_path: Option<std::path::PathBuf>,
	/// Course selected when none is given.
	default_selection: Option<String>,
}

impl CourseMapConfig {
	/// Directory holding the config file, `None` if no home directory can be determined.
	pub fn config_dir() -> Option<std::path::PathBuf> {
		#[cfg(target_os = "windows")]
		let path = std::env::var_os("APPDATA").map(std::path::PathBuf::from);

		#[cfg(not(target_os = "windows"))]
		let path = if let Some(e) = std::env::var_os("XDG_CONFIG_HOME") {
			Some(std::path::PathBuf::from(e))
		} else {
			std::env::var_os("HOME").map(|home| std::path::PathBuf::from(home).join(".config"))
		};

		path.map(|p| p.join("coursemap"))
	}

	/// Loads `config.json` from [`config_dir()`](CourseMapConfig::config_dir()).
	/// # Errors
	/// - [`IO`](crate::Error::IO) when the file is missing or unreadable.
	/// - [`SerdeJSON`](crate::Error::SerdeJSON) when the file is malformed.
	pub fn load_from_disk() -> crate::Result<Self> {
		let dir = Self::config_dir().ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "no config directory"))?;
		Self::load_from_file(dir.join("config.json"))
	}

	pub fn load_from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
		log::debug!("Reading config from {}", path.as_ref().display());
		let data = std::fs::read_to_string(path)?;
		Ok(serde_json::from_str(&data)?)
	}

	pub fn catalog_path(&self) -> Option<&std::path::Path> {
		self.catalog_path.as_deref()
	}
	pub fn set_catalog_path(&mut self, catalog_path: Option<std::path::PathBuf>) {
		self.catalog_path = catalog_path;
	}

	pub fn default_selection(&self) -> Option<&str> {
		self.default_selection.as_deref()
	}
	pub fn set_default_selection(&mut self, default_selection: Option<String>) {
		self.default_selection = default_selection;
	}
}
