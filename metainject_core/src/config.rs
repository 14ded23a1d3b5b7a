use serde::Deserialize;
use serde::Deserializer;

use crate::BoundConfig;
use crate::InjectError;
use crate::InjectResult;

/// Key list entry that selects every available key.
pub const WILDCARD: &str = "*";

/// Pattern used when none is configured: every file.
pub const DEFAULT_PATTERN: &str = "**/*";

/// Options controlling which files, file keys and metadata keys take part in
/// an injection run.
///
/// ```toml
/// pattern = ["**/*.md", "!drafts/**"]
/// metadata_keys = ["gotham.hero", "gotham.police"]
/// file_keys = ["contents", "title"]
///
/// [metadata_key_bounds]
/// left = "{{ "
/// right = " }}"
/// ```
///
/// Every field is optional. A single string is accepted wherever a list is
/// expected, and the camelCase spellings (`metadataKeys`, `metadataKeyBounds`,
/// `fileKeys`) are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InjectConfig {
	/// Glob patterns selecting the files to process. Patterns starting with
	/// `!` exclude files. Defaults to `**/*`.
	#[serde(default = "default_pattern", deserialize_with = "one_or_many")]
	pub pattern: Vec<String>,
	/// Metadata key paths to inject. Defaults to every top-level key.
	#[serde(default, alias = "metadataKeys")]
	pub metadata_keys: KeySelection,
	/// Markers delimiting a token. Defaults to `{{ ` and ` }}`.
	#[serde(default, alias = "metadataKeyBounds")]
	pub metadata_key_bounds: BoundConfig,
	/// File record keys searched for tokens. Defaults to every key.
	#[serde(default, alias = "fileKeys")]
	pub file_keys: KeySelection,
}

impl Default for InjectConfig {
	fn default() -> Self {
		Self {
			pattern: default_pattern(),
			metadata_keys: KeySelection::All,
			metadata_key_bounds: BoundConfig::default(),
			file_keys: KeySelection::All,
		}
	}
}

impl InjectConfig {
	/// Parse options from a TOML document.
	pub fn from_toml_str(content: &str) -> InjectResult<Self> {
		toml::from_str(content).map_err(|e| InjectError::ConfigParse(e.to_string()))
	}

	/// Parse options from a JSON document.
	pub fn from_json_str(content: &str) -> InjectResult<Self> {
		serde_json::from_str(content).map_err(|e| InjectError::ConfigParse(e.to_string()))
	}

	#[must_use]
	pub fn with_pattern<I, S>(mut self, patterns: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.pattern = patterns.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	pub fn with_metadata_keys<I, S>(mut self, keys: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.metadata_keys = KeySelection::from_list(keys.into_iter().map(Into::into).collect());
		self
	}

	#[must_use]
	pub fn with_file_keys<I, S>(mut self, keys: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.file_keys = KeySelection::from_list(keys.into_iter().map(Into::into).collect());
		self
	}

	#[must_use]
	pub fn with_bounds(mut self, bounds: BoundConfig) -> Self {
		self.metadata_key_bounds = bounds;
		self
	}
}

/// A list of keys, or every key available at the time of use.
///
/// A list whose first entry is `*` is the wildcard. The wildcard is expanded
/// by [`KeySelection::select`] and never looked up as a literal key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "StringOrList")]
#[allow(variant_size_differences)]
pub enum KeySelection {
	#[default]
	All,
	Keys(Vec<String>),
}

impl KeySelection {
	pub fn from_list(keys: Vec<String>) -> Self {
		if keys.first().is_some_and(|key| key == WILDCARD) {
			Self::All
		} else {
			Self::Keys(keys)
		}
	}

	pub fn is_wildcard(&self) -> bool {
		matches!(self, Self::All)
	}

	/// Expand the selection against the keys currently available.
	pub fn select<'a>(&self, available: impl IntoIterator<Item = &'a String>) -> Vec<String> {
		match self {
			Self::All => available.into_iter().cloned().collect(),
			Self::Keys(keys) => keys.clone(),
		}
	}
}

impl From<StringOrList> for KeySelection {
	fn from(value: StringOrList) -> Self {
		Self::from_list(value.into())
	}
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrList {
	One(String),
	Many(Vec<String>),
}

impl From<StringOrList> for Vec<String> {
	fn from(value: StringOrList) -> Self {
		match value {
			StringOrList::One(item) => vec![item],
			StringOrList::Many(items) => items,
		}
	}
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(StringOrList::deserialize(deserializer)?.into())
}

fn default_pattern() -> Vec<String> {
	vec![DEFAULT_PATTERN.to_string()]
}

/// Parse a data document into a `serde_json::Value` based on its format.
/// `source_name` is only used in error messages.
pub fn parse_document(
	content: &str,
	format: &str,
	source_name: &str,
) -> InjectResult<serde_json::Value> {
	match format.trim().to_ascii_lowercase().as_str() {
		"text" | "string" | "raw" | "txt" => Ok(serde_json::Value::String(content.to_string())),
		"json" => {
			serde_json::from_str(content).map_err(|e| {
				InjectError::DataFile {
					source_name: source_name.to_string(),
					reason: e.to_string(),
				}
			})
		}
		"toml" => {
			let toml_value: toml::Value = toml::from_str(content).map_err(|e| {
				InjectError::DataFile {
					source_name: source_name.to_string(),
					reason: e.to_string(),
				}
			})?;
			toml_to_json(toml_value, source_name)
		}
		"yaml" | "yml" => {
			serde_yaml_ng::from_str(content).map_err(|e| {
				InjectError::DataFile {
					source_name: source_name.to_string(),
					reason: e.to_string(),
				}
			})
		}
		other => Err(InjectError::UnsupportedDataFormat(other.to_string())),
	}
}

/// Convert a `toml::Value` to a `serde_json::Value`.
fn toml_to_json(value: toml::Value, source_name: &str) -> InjectResult<serde_json::Value> {
	let json = match value {
		toml::Value::String(s) => serde_json::Value::String(s),
		toml::Value::Integer(i) => serde_json::Value::Number(i.into()),
		toml::Value::Float(f) => {
			serde_json::Value::Number(serde_json::Number::from_f64(f).ok_or_else(|| {
				InjectError::UnconvertibleFloat {
					source_name: source_name.to_string(),
					value: f.to_string(),
				}
			})?)
		}
		toml::Value::Boolean(b) => serde_json::Value::Bool(b),
		toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
		toml::Value::Array(arr) => {
			let items: InjectResult<Vec<serde_json::Value>> = arr
				.into_iter()
				.map(|v| toml_to_json(v, source_name))
				.collect();
			serde_json::Value::Array(items?)
		}
		toml::Value::Table(table) => {
			let mut map = serde_json::Map::new();
			for (k, v) in table {
				map.insert(k, toml_to_json(v, source_name)?);
			}
			serde_json::Value::Object(map)
		}
	};

	Ok(json)
}
