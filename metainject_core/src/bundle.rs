use serde_json::Value;

use crate::FileRecord;
use crate::FileValue;
use crate::Files;
use crate::InjectError;
use crate::InjectResult;
use crate::Metadata;
use crate::parse_document;

/// Record keys whose string values are loaded as byte buffers by default.
pub const DEFAULT_BYTE_KEYS: [&str; 1] = ["contents"];

/// Metadata and file records loaded together from a single document:
///
/// ```json
/// {
///   "metadata": { "gotham": { "hero": "Batman" } },
///   "files": {
///     "index.md": { "title": "{{ gotham.hero }}", "contents": "..." }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bundle {
	pub metadata: Metadata,
	pub files: Files,
}

impl Bundle {
	/// Parse a bundle document in the given format (`json`, `toml`, `yaml`).
	pub fn parse<S: AsRef<str>>(content: &str, format: &str, byte_keys: &[S]) -> InjectResult<Self> {
		let value = parse_document(content, format, "bundle")?;
		Self::from_value(value, byte_keys)
	}

	/// Split a parsed document into metadata and file records. String values
	/// stored directly under one of `byte_keys` on a record become
	/// [`FileValue::Bytes`].
	pub fn from_value<S: AsRef<str>>(value: Value, byte_keys: &[S]) -> InjectResult<Self> {
		let Value::Object(mut root) = value else {
			return Err(InjectError::InvalidBundle(
				"expected a mapping at the top level".to_string(),
			));
		};

		let metadata = match root.remove("metadata") {
			None | Some(Value::Null) => Metadata::new(),
			Some(Value::Object(metadata)) => metadata,
			Some(_) => {
				return Err(InjectError::InvalidBundle(
					"`metadata` must be a mapping".to_string(),
				));
			}
		};

		let files_value = match root.remove("files") {
			None | Some(Value::Null) => serde_json::Map::new(),
			Some(Value::Object(files)) => files,
			Some(_) => {
				return Err(InjectError::InvalidBundle(
					"`files` must be a mapping".to_string(),
				));
			}
		};

		let mut files = Files::new();
		for (file, record) in files_value {
			let Value::Object(record) = record else {
				return Err(InjectError::InvalidBundle(format!(
					"file `{file}` must be a mapping"
				)));
			};

			let record: FileRecord = record
				.into_iter()
				.map(|(key, value)| {
					let value = match value {
						Value::String(text)
							if byte_keys.iter().any(|byte_key| byte_key.as_ref() == key) =>
						{
							FileValue::Bytes(text.into_bytes())
						}
						other => FileValue::from(other),
					};
					(key, value)
				})
				.collect();

			files.insert(file, record);
		}

		Ok(Self { metadata, files })
	}

	/// Render the file records as JSON. Byte buffers are decoded lossily.
	pub fn files_to_json(&self) -> Value {
		Value::Object(
			self.files
				.iter()
				.map(|(file, record)| (file.clone(), record.to_json()))
				.collect(),
		)
	}
}
