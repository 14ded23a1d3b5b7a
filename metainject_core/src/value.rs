use std::collections::BTreeMap;

use derive_more::Deref;
use derive_more::DerefMut;
use serde_json::Value;

/// Read-only source of replacement values. Values may be nested to any depth
/// and are addressed with dot-separated key paths (see [`resolve`]).
///
/// [`resolve`]: crate::resolve
pub type Metadata = serde_json::Map<String, Value>;

/// All file records handed to the [`Injector`](crate::Injector), keyed by
/// file identifier (usually a `/`-separated relative path).
pub type Files = BTreeMap<String, FileRecord>;

/// A value stored under a key of a [`FileRecord`].
///
/// Only [`Text`](Self::Text) and [`Bytes`](Self::Bytes) hold searchable text.
/// [`Sequence`](Self::Sequence) and [`Mapping`](Self::Mapping) are walked
/// recursively and the remaining scalars are never touched.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FileValue {
	/// A plain string, e.g. a frontmatter field.
	Text(String),
	/// Raw file contents.
	Bytes(Vec<u8>),
	Sequence(Vec<FileValue>),
	Mapping(BTreeMap<String, FileValue>),
	Number(serde_json::Number),
	Bool(bool),
	Null,
}

impl FileValue {
	/// Returns true for values whose children can be addressed by key or
	/// index.
	pub fn can_have_keys(&self) -> bool {
		matches!(self, Self::Sequence(_) | Self::Mapping(_))
	}

	/// Returns the text held by this value. Byte buffers are returned only when
	/// they hold valid UTF-8.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			Self::Bytes(bytes) => std::str::from_utf8(bytes).ok(),
			_ => None,
		}
	}

	/// Convert into a JSON value. Byte buffers are decoded lossily into
	/// strings.
	pub fn to_json(&self) -> Value {
		match self {
			Self::Text(text) => Value::String(text.clone()),
			Self::Bytes(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
			Self::Sequence(items) => Value::Array(items.iter().map(Self::to_json).collect()),
			Self::Mapping(map) => {
				Value::Object(
					map.iter()
						.map(|(key, value)| (key.clone(), value.to_json()))
						.collect(),
				)
			}
			Self::Number(number) => Value::Number(number.clone()),
			Self::Bool(flag) => Value::Bool(*flag),
			Self::Null => Value::Null,
		}
	}
}

impl From<Value> for FileValue {
	fn from(value: Value) -> Self {
		match value {
			Value::String(text) => Self::Text(text),
			Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
			Value::Object(map) => {
				Self::Mapping(
					map.into_iter()
						.map(|(key, value)| (key, Self::from(value)))
						.collect(),
				)
			}
			Value::Number(number) => Self::Number(number),
			Value::Bool(flag) => Self::Bool(flag),
			Value::Null => Self::Null,
		}
	}
}

impl From<&str> for FileValue {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for FileValue {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<Vec<u8>> for FileValue {
	fn from(bytes: Vec<u8>) -> Self {
		Self::Bytes(bytes)
	}
}

impl From<&[u8]> for FileValue {
	fn from(bytes: &[u8]) -> Self {
		Self::Bytes(bytes.to_vec())
	}
}

impl From<Vec<FileValue>> for FileValue {
	fn from(items: Vec<FileValue>) -> Self {
		Self::Sequence(items)
	}
}

impl From<bool> for FileValue {
	fn from(flag: bool) -> Self {
		Self::Bool(flag)
	}
}

impl From<i64> for FileValue {
	fn from(number: i64) -> Self {
		Self::Number(number.into())
	}
}

/// The mutable data attached to a single file: frontmatter fields, the file
/// contents and anything else earlier pipeline stages stored on it.
#[derive(Debug, Clone, Default, PartialEq, Deref, DerefMut)]
pub struct FileRecord(BTreeMap<String, FileValue>);

impl FileRecord {
	pub fn new() -> Self {
		Self::default()
	}

	/// Convert the record into a JSON object.
	pub fn to_json(&self) -> Value {
		Value::Object(
			self.0
				.iter()
				.map(|(key, value)| (key.clone(), value.to_json()))
				.collect(),
		)
	}
}

impl<K: Into<String>, V: Into<FileValue>> FromIterator<(K, V)> for FileRecord {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		)
	}
}

impl From<BTreeMap<String, FileValue>> for FileRecord {
	fn from(map: BTreeMap<String, FileValue>) -> Self {
		Self(map)
	}
}
